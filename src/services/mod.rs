// Passify services
// Services provide core functionality: password generation, the backend
// REST client, and settings persistence.

pub mod backend_client;
pub mod password_generator;
pub mod settings_engine;
