mod flight;
mod protocol;
mod session;
