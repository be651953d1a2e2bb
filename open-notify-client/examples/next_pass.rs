use open_notify_client::{Client, PassFilter};

fn main() {
    let mut client = Client::new("http://api.open-notify.org").unwrap();

    let position = client.position().unwrap();
    println!(
        "ISS at {} / {}",
        position.iss_position.latitude, position.iss_position.longitude
    );

    // next pass over Indianapolis
    let filter = PassFilter::new(39.7683333, -86.1580556).number(1);
    let passes = client.passes(&filter).unwrap();
    for pass in &passes.response {
        println!("rises at {} for {} seconds", pass.risetime, pass.duration);
    }
}
