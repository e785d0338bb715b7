//! Rift template compiler CLI.

use riftc::commands::{explain_error, lex_file, parse_file, parse_render_args, render_files};

fn main() {
    riftc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "render" => {
            let options = match parse_render_args(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    print_render_usage();
                    std::process::exit(1);
                }
            };
            render_files(&options);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: riftc lex <file.rift>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: riftc parse <file.rift>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: riftc explain <ERROR_CODE>");
                eprintln!("Example: riftc explain E1003");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Rift Template Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_render_usage() {
    eprintln!("Usage: riftc render <file.rift>... [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data=<file.json>   Data the templates are evaluated against");
    eprintln!("  --mode=<mode>        Output mode: pretty (default), minify, preserve");
    eprintln!("  --indent=<n>         Spaces per nesting level in pretty mode (default 2)");
    eprintln!("  --out=<dir>          Write <name>.html files into <dir> instead of stdout");
    eprintln!("  --emit=<type>        Emit: html (default), vdom");
    eprintln!("  --no-doctype         Omit <!DOCTYPE html> when the template declares none");
}

fn print_usage() {
    println!("Rift Template Compiler");
    println!();
    println!("Usage: riftc <command> [options]");
    println!();
    println!("Commands:");
    println!("  render <file.rift>...  Compile templates to HTML");
    println!("  lex <file.rift>        Tokenize and display tokens");
    println!("  parse <file.rift>      Parse and display the tree");
    println!("  explain <code>         Explain an error code (e.g., E1003)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Render options:");
    println!("  --data=<file.json>     Data the templates are evaluated against");
    println!("  --mode=<mode>          Output mode: pretty (default), minify, preserve");
    println!("  --indent=<n>           Spaces per nesting level in pretty mode (default 2)");
    println!("  --out=<dir>            Write <name>.html files into <dir> instead of stdout");
    println!("  --emit=<type>          Emit: html (default), vdom");
    println!("  --no-doctype           Omit <!DOCTYPE html> when the template declares none");
    println!();
    println!("Environment:");
    println!("  RIFT_LOG=<filter>      Enable tracing output (e.g. rift_parse=trace)");
    println!("  NO_COLOR               Disable colored diagnostics");
    println!();
    println!("Examples:");
    println!("  riftc render index.rift --data=site.json");
    println!("  riftc render pages/*.rift --mode=minify --out=dist");
    println!("  riftc parse index.rift");
    println!("  riftc explain E1003");
}
