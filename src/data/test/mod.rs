mod car;
mod message;
mod order;
mod user;
