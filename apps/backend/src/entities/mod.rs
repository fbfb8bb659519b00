pub mod game_players;
pub mod game_standings;
pub mod games;
pub mod profiles;
pub mod scores;
pub mod sessions;

pub use game_players::Entity as GamePlayers;
pub use game_players::Model as GamePlayer;
pub use game_standings::Entity as GameStandings;
pub use games::Entity as Games;
pub use games::Model as Game;
pub use profiles::Entity as Profiles;
pub use profiles::Model as Profile;
pub use scores::Entity as Scores;
pub use scores::Model as Score;
pub use sessions::Entity as Sessions;
pub use sessions::Model as Session;
