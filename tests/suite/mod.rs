mod board_scenarios;
mod config_loading;
mod mouse_gestures;
