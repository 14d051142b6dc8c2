#[macro_use]
extern crate lazy_static;

use clap::{App, Arg, ArgMatches};
use postboard_common::{render_posts, PostsClient, StaticPage};
use std::{
    fs,
    io::{self, Write},
    process,
};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::CONFIG;

fn main() {
    let matches = App::new("Postboard")
        .bin_name("postboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fetches the latest posts and renders them as an HTML page.")
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .takes_value(true)
                .help("URL of the posts API"),
        )
        .arg(
            Arg::with_name("title")
                .short("t")
                .long("title")
                .takes_value(true)
                .help("Title of the generated page"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Where to write the page, instead of the standard output"),
        )
        .get_matches();

    // Loaded before the subscriber so that RUST_LOG can come from .env
    let dotenv = dotenv::dotenv();
    init_logging();
    match dotenv {
        Ok(path) => info!("Configuration read from {}", path.display()),
        Err(ref e) if e.not_found() => debug!("no .env was found"),
        Err(e) => warn!("Couldn't read .env: {}", e),
    }

    if let Err(e) = run(&matches) {
        error!("Couldn't write the page: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &ArgMatches<'_>) -> io::Result<()> {
    let endpoint = args.value_of("endpoint").unwrap_or(CONFIG.endpoint.as_str());
    let title = args.value_of("title").unwrap_or(CONFIG.page_title.as_str());
    let output = args.value_of("output").or_else(|| CONFIG.output.as_deref());

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let client = PostsClient::new(endpoint);
    info!("Fetching posts from {}", client.endpoint());
    let posts = rt.block_on(client.fetch_posts());

    let page = StaticPage::new(title);
    // Infallible for a static page
    if let Err(e) = render_posts(&page, &posts) {
        match e {}
    }
    info!("Rendered {} posts", page.cards().len());

    let html = page.to_html();
    match output {
        Some(path) => fs::write(path, html),
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()
        }
    }
}
