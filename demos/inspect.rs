fn main() {
    let args: Vec<String> = std::env::args().collect();
    let message = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "## Leg day\n1. **Squats**: 4x8\n2. Lunges, *slow* tempo\n\n- rest `90s` between sets".to_string()
    };

    for block in chatmark::render(&message) {
        match &block {
            chatmark::Block::Heading { level, text } => println!("H{} {}", level, text),
            chatmark::Block::ListItem { ordered, content } => {
                let marker = if *ordered { "#" } else { "*" };
                println!("{} {:?}", marker, content);
            }
            chatmark::Block::Paragraph { content } => println!("P {:?}", content),
            chatmark::Block::Blank => println!(),
        }
    }
}
