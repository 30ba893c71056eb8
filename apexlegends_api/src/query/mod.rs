mod common;
pub use self::common::Query;

mod player;
pub use self::player::{PlayerId, PlayerQuery};

mod history;
pub use self::history::{HistoryAction, MatchHistoryQuery};

mod map_rotation;
pub use self::map_rotation::{MapRotationQuery, MapRotationVersion};

mod news;
pub use self::news::{NewsQuery, DEFAULT_NEWS_LANG};
