use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use log::error;
use structopt::StructOpt;

use proxsearch::utils::{logger, time};
use proxsearch::{ProxConfig, SOURCE_CONFIG_FILE};
use proxsearch_common::Result;
use proxsearch_search::p_debug;

#[derive(StructOpt, Debug)]
#[structopt(name = "proxsearch")]
struct CliArgs {
    #[structopt(parse(from_os_str), help = "Folder of <field>/<term>.json postings lists")]
    index_folder_path: PathBuf,
    #[structopt(parse(from_os_str), help = "Json file containing the query tree")]
    query_file_path: PathBuf,
    #[structopt(
        short,
        long,
        parse(from_os_str),
        help = "Defaults to proxsearch_config.json in the index folder"
    )]
    config_file_path: Option<PathBuf>,
    #[structopt(long, help = "Logs the time taken to evaluate the query")]
    perf: bool,
}

fn get_relative_or_absolute_path(from_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        from_path.join(path)
    } else {
        PathBuf::from(path)
    }
}

fn resolve_paths(args: &CliArgs) -> Result<(PathBuf, PathBuf, PathBuf)> {
    let cwd = env::current_dir()?;

    let index_return = get_relative_or_absolute_path(&cwd, &args.index_folder_path);
    let query_return = get_relative_or_absolute_path(&cwd, &args.query_file_path);
    let config_return = if let Some(config_raw_file_path) = &args.config_file_path {
        get_relative_or_absolute_path(&cwd, config_raw_file_path)
    } else {
        index_return.join(SOURCE_CONFIG_FILE)
    };

    Ok((index_return, query_return, config_return))
}

fn run(args: CliArgs, log_handle: &log4rs::Handle) -> Result<()> {
    let (index_folder_path, query_file_path, config_file_path) = resolve_paths(&args)?;

    p_debug!(
        "Resolved Paths:\n{}\n{}\n{}",
        index_folder_path.display(),
        query_file_path.display(),
        config_file_path.display(),
    );

    let config = ProxConfig::from_file(&config_file_path)?;
    logger::set_log_level(log_handle, config.get_log_level()?)?;

    let now = if args.perf { Some(Instant::now()) } else { None };

    let output = proxsearch::run(&index_folder_path, &query_file_path, &config)?;
    println!("{}", output);

    time::print_time_elapsed(&now, "Query evaluated");

    Ok(())
}

fn main() {
    let args: CliArgs = CliArgs::from_args();

    let log_handle = match logger::init_logger() {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to initialise logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args, &log_handle) {
        error!("{}", e);
        process::exit(1);
    }
}
