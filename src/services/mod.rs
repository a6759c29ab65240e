// LendHand services
// Services provide supporting functionality around the managers: image
// resolution, the item catalog stand-in, the REST client, and settings.

pub mod api_client;
pub mod catalog;
pub mod image_table;
pub mod settings_engine;
