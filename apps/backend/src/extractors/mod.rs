pub mod game_id;
pub mod validated_json;

pub use validated_json::ValidatedJson;
