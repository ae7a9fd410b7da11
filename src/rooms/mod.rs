mod alias;
mod resolver;

pub use alias::{RoomAlias, SERVER_NAME};
pub use resolver::{audience, audience_backstage, backstage, resolve, resolve_all, ResolvedEvent};
