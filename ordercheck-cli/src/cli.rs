use std::path::PathBuf;

use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
/// Offline auditing of ByzCast replica logs.
pub struct TopLevel {
    #[argh(subcommand)]
    pub nested: Subcommands,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum Subcommands {
    Order(OrderCmd),
    Latency(LatencyCmd),
    CacheCheck(CacheCheckCmd),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Check pairwise order agreement and search for cycles across one run's logs
#[argh(subcommand, name = "order")]
pub struct OrderCmd {
    #[argh(positional)]
    /// directory containing the run's log files
    pub base_path: PathBuf,

    #[argh(option)]
    /// field label preceding the request id (default RID)
    pub milestone_label: Option<String>,

    #[argh(option)]
    /// phrase marking local completion (default "Request locally handled")
    pub milestone_phrase: Option<String>,

    #[argh(option)]
    /// regex for the request id token (default UUID-shaped)
    pub request_id_pattern: Option<String>,

    #[argh(option)]
    /// file name suffix used for discovery (default .log)
    pub log_suffix: Option<String>,

    #[argh(option)]
    /// regex recovering the group token from a file name (default g\d+)
    pub group_pattern: Option<String>,

    #[argh(switch)]
    /// exit non-zero when any unordered pair or cycle is found
    pub strict: bool,

    #[argh(switch)]
    /// emit the report as JSON instead of text
    pub json: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Average the LATENCY column across client stats files
#[argh(subcommand, name = "latency")]
pub struct LatencyCmd {
    #[argh(positional)]
    /// tab-separated stats files
    pub files: Vec<PathBuf>,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Verify the cache pending/completion alternation for one request id
#[argh(subcommand, name = "cache-check")]
pub struct CacheCheckCmd {
    #[argh(option)]
    /// the request id to track
    pub request_id: String,

    #[argh(positional)]
    /// log files to check
    pub files: Vec<PathBuf>,
}
