use argscan::ArgParser;

fn main() {
    let mut parser = ArgParser::new();

    if let Err(error) = parser.parse_env() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    if parser.has_flag(Some("--help"), Some("-h")) {
        println!("usage: echo_args [--sep=SEP] [--repeat=N] [ITEM ...]");
        return;
    }

    let separator = parser.flag(Some("--sep"), Some("-s"), Some(" ")).unwrap_or(" ");
    let repeat = match parser.flag_as::<usize>(Some("--repeat"), Some("-r")) {
        Ok(repeat) => repeat.unwrap_or(1),
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let line = parser.arguments().collect::<Vec<&str>>().join(separator);

    for _ in 0..repeat {
        println!("{line}");
    }

    for (index, flag) in parser.flags().iter().enumerate() {
        eprintln!("flag {index}: {flag}");
    }
}
