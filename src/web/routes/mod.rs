pub mod chats;
pub mod encounters;
pub mod interests;
pub mod location;
pub mod matches;
