mod comments;
mod threads;
