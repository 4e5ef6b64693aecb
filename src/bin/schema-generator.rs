use pixel_press_back::schema::create_schema;
use pixel_press_back::state::{AppState, catalog::Catalog};

fn main() {
    let schema = create_schema(AppState::new(Catalog::default()));
    println!("{}", schema.sdl());
}
