use open_notify_client::Client;

fn main() {
    let mut client = Client::new("http://api.open-notify.org").unwrap();

    let astronauts = client.astronauts().unwrap();
    for astronaut in &astronauts.people {
        println!("{} ({})", astronaut.name, astronaut.craft);
    }
    println!("{} people in space", astronauts.number);
}
