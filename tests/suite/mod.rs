mod config_wiring;
mod dialing;
