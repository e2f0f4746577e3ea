mod car;
mod dealer;
mod favorite;
mod order;
mod user;
