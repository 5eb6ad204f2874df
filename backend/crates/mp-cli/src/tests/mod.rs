mod client;
mod dispatch;
