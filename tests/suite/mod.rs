mod config;
mod properties;
mod thinking;
mod toasts;
