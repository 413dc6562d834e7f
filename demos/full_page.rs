//! Prints a complete HTML page with one map to stdout.
//!
//! Run with `cargo run --example full_page > map.html` and open the file in
//! a browser.

use mapscribe::{ElementKind, MapBuilder, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut map = MapBuilder::new().with_id("madrid").with_size(800, 500);

    let sol = map.add_marker(40.4169, -3.7035);
    map.set_tooltip(ElementKind::Marker, sol, "Puerta del Sol")?;
    map.set_click_text(ElementKind::Marker, sol, "Kilometre zero of the Spanish road network")?;

    let park = map.add_circle(40.4153, -3.6845, Some("green"), Some(350.0));
    map.set_popup(ElementKind::Circle, park, "El Retiro")?;

    map.add_polyline(
        vec![[-3.7035, 40.4169], [-3.6946, 40.4180], [-3.6845, 40.4153]],
        Some("red"),
    )?;

    println!("<!DOCTYPE html>");
    println!("<html>");
    println!("<head>");
    println!("\t<title>mapscribe demo</title>");
    print!("{}", mapscribe::head_tags());
    println!("</head>");
    println!("<body>");
    print!("{}", map.render()?);
    print!("{}", mapscribe::on_click_div());
    println!("</body>");
    println!("</html>");
    Ok(())
}
