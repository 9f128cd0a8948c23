// End-to-end tests for the Taigi TTS API
//
// Each test gets its own server on an ephemeral port, its own history file in
// a temporary directory, and a fake upstream TTS service, so tests run in
// parallel without sharing state.

mod helpers;
mod test_health;
