use std::convert::TryFrom;
use std::env;

use tracing_subscriber::EnvFilter;
use uricow::Uri;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args();
    let argv0 = args.next()
        .expect("First argument is always present");

    let base = match args.next() {
        Some(base) => base,
        None => {
            eprintln!("No URIs were given on the command line.");
            eprintln!("Try running this as `{} http://example.com:1234/hello ../../path`", argv0);
            return;
        }
    };

    let base = match Uri::try_from(base.as_str()) {
        Ok(parsed) => {
            println!("<{}>: {:#?}", base, parsed);

            if parsed.as_str() != base {
                println!("Warning: URI doesn't round-trip -- serializes into:");
                println!("<{}>", parsed);
            }

            parsed
        }
        Err(error) => {
            eprintln!("<{}>: {}", base, error);
            return;
        }
    };

    for relative in args {
        match base.resolve_relative_uri(&relative) {
            Ok(resolved) => println!("<{}> + <{}> = <{}>", base, relative, resolved),
            Err(error) => eprintln!("<{}> + <{}>: {}", base, relative, error),
        }
    }
}
