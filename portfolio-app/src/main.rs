mod about;
mod carousel;
mod catalog;
mod config;
mod contact;
mod date;
mod effects;
mod footer;
mod hero;
mod home;
mod hooks;
mod mail;
mod nav;
mod profile;
mod projects;
mod routes;
mod skills;
mod text_fx;
mod theme;

fn main() {
    dioxus::launch(routes::App);
}
