use hpgl_input::parse_hpgl;

fn main() {
    println!("=== HP-GL/2 Pen Move Demo ===");

    let documents = [
        "IN;SP1;PU0,0;PD2500,0,0,1500,0,0;",
        "IN; SP1; PU 10,10; PD 10, 30; PU 20, 30 PD 20, 10, 10, 10;",
        "DT&;LBlabel text&PU12,13,14;",
        "PE 123 #AB",
        "...PD0,0,10,10;",
        "   ",
    ];

    for document in documents {
        println!("\nInput: {:?}", document);
        for event in parse_hpgl(document) {
            match event {
                Ok(event) => println!("Event: {:?} {:?}", event.kind, event.pairs),
                Err(e) => println!("Error: {}", e),
            }
        }
    }
}
