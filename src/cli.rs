//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use reviewparse::corpus::ZeroVotesPolicy;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "reviewparse", about = "review corpus parsing tool.")]
/// Holds every command that is callable by the `reviewparse` command.
pub enum ReviewParse {
    #[structopt(about = "Parse a corpus into JSON lines")]
    Parse(Parse),
    #[structopt(about = "Compute (and check) corpus statistics")]
    Stats(Stats),
    #[structopt(about = "Export training material")]
    Export(Export),
}

#[derive(Debug, StructOpt)]
/// Parse command and parameters.
///
/// ```sh
/// reviewparse-parse 0.1.0
/// Parse a corpus into JSON lines
///
/// USAGE:
///     reviewparse parse [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -c, --clean      clean review texts
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -b, --block-size <block-size>    number of lines per review [default: 8]
///     -m, --min-votes <min-votes>      keep reviews with at least this many votes
///     -z, --zero-votes <zero-votes>    handling of reviews without votes: exclude, reject or keep=<ratio>
///                                      [default: exclude]
///
/// ARGS:
///     <src>    source corpus (plain or .gz)
///     <dst>    destination file (JSON lines)
/// ```
pub struct Parse {
    #[structopt(parse(from_os_str), help = "source corpus (plain or .gz)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination file (JSON lines)")]
    pub dst: PathBuf,
    #[structopt(
        short = "b",
        long = "block-size",
        help = "number of lines per review",
        default_value = "8"
    )]
    pub block_size: usize,
    #[structopt(
        short = "z",
        long = "zero-votes",
        help = "handling of reviews without votes: exclude, reject or keep=<ratio>",
        default_value = "exclude"
    )]
    pub zero_votes: ZeroVotesPolicy,
    #[structopt(
        short = "m",
        long = "min-votes",
        help = "keep reviews with at least this many votes"
    )]
    pub min_votes: Option<u32>,
    #[structopt(short = "c", long = "clean", help = "clean review texts")]
    pub clean: bool,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(parse(from_os_str), help = "source corpus (plain or .gz)")]
    pub src: PathBuf,
    #[structopt(
        short = "b",
        long = "block-size",
        help = "number of lines per review",
        default_value = "8"
    )]
    pub block_size: usize,
    #[structopt(
        short = "z",
        long = "zero-votes",
        help = "handling of reviews without votes: exclude, reject or keep=<ratio>",
        default_value = "exclude"
    )]
    pub zero_votes: ZeroVotesPolicy,
    #[structopt(long = "products", help = "expected number of distinct products")]
    pub products: Option<usize>,
    #[structopt(long = "users", help = "expected number of distinct users")]
    pub users: Option<usize>,
    #[structopt(long = "reviews", help = "expected number of reviews")]
    pub reviews: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Export command and parameters.
pub struct Export {
    #[structopt(parse(from_os_str), help = "source corpus (plain or .gz)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "config",
        help = "path to a JSON configuration file"
    )]
    pub config: Option<PathBuf>,
}
