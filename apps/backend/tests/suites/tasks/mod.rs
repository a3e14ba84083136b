mod crud;
mod listing;
mod ownership;
