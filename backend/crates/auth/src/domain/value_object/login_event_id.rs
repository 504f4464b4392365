use kernel::id::Id;

pub struct LoginEventMarker;
pub type LoginEventId = Id<LoginEventMarker>;
