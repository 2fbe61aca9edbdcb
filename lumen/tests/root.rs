mod batching;
mod common;
