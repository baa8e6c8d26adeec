mod image;
mod message;
