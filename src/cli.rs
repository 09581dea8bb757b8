// src/cli.rs
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::config::{self, consts::DEFAULT_CONFIG_FILE};
use crate::domain::policy::{self, ApiPolicy, PolicyComparator, UiPolicy};
use crate::progress::Progress;
use crate::recon::{Envelope, Reconciler};
use crate::sort::{self, ColumnKind, SortDirection};
use crate::table::{self, HtmlPages, TableSurface};

pub struct SortCheck {
    pub column: String,
    pub dir: SortDirection,
    pub kind: ColumnKind,
}

pub struct Params {
    pub pages: PathBuf,
    pub api: PathBuf,
    pub key: Option<String>,
    pub config: PathBuf,
    pub dump: Option<PathBuf>,
    pub sort: Option<SortCheck>,
    pub log_level: String,
}

/// What the run found. Errors (including an aborted sweep) are `Err`.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Reconciled,
    Mismatched(usize),
}

pub enum Command {
    Run(Params),
    Help,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut pages = None;
    let mut api = None;
    let mut key = None;
    let mut config = PathBuf::from(DEFAULT_CONFIG_FILE);
    let mut dump = None;
    let mut sort_col: Option<(String, SortDirection)> = None;
    let mut date = false;
    let mut log_level = s!("warn");

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| eyre!("Missing value for {name}"));
        match a.as_str() {
            "--pages" => pages = Some(PathBuf::from(value("--pages")?)),
            "--api" => api = Some(PathBuf::from(value("--api")?)),
            "--key" => key = Some(value("--key")?),
            "--config" => config = PathBuf::from(value("--config")?),
            "--dump" => dump = Some(PathBuf::from(value("--dump")?)),
            "--sort" => {
                let column = value("--sort")?;
                let dir = match value("--sort")?.to_ascii_lowercase().as_str() {
                    "asc" => SortDirection::Ascending,
                    "desc" => SortDirection::Descending,
                    other => return Err(eyre!("Unknown sort direction: {other}")),
                };
                sort_col = Some((column, dir));
            }
            "--date" => date = true,
            "--log" => log_level = value("--log")?,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }

    let kind = if date { ColumnKind::Date } else { ColumnKind::Text };
    Ok(Command::Run(Params {
        pages: pages.ok_or_else(|| eyre!("--pages is required"))?,
        api: api.ok_or_else(|| eyre!("--api is required"))?,
        key,
        config,
        dump,
        sort: sort_col.map(|(column, dir)| SortCheck { column, dir, kind }),
        log_level,
    }))
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, max_pages: usize) {
        eprintln!("Sweeping up to {max_pages} page(s)");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, page: usize, rows: usize) {
        eprintln!("page {page}: {rows} row(s)");
    }
}

pub fn run(params: &Params) -> Result<Outcome> {
    let mut opts = config::file::load(&params.config);
    if let Some(k) = &params.key {
        opts.recon.key_field = k.clone();
    }

    let mut surface = HtmlPages::from_dir(&params.pages, &opts.pagination.active_marker)
        .wrap_err_with(|| format!("loading pages from {}", params.pages.display()))?;

    // Optional columns are read only when the grid renders them.
    let mut columns: Vec<&str> = policy::REQUIRED_COLUMNS.to_vec();
    for optional in [policy::COL_RISK_STATES, policy::COL_SUB_PLANS] {
        if table::column_index(&surface, optional).is_ok() {
            columns.push(optional);
        }
    }
    if let Some(check) = &params.sort {
        if !columns.contains(&check.column.as_str()) {
            columns.push(&check.column);
        }
    }

    eprintln!("Reading {} page(s)…", surface.page_count());
    let sweep = table::sweep_columns(&mut surface, &columns, &opts.pagination, Some(&mut StderrProgress))
        .wrap_err("pagination sweep did not complete")?;

    if let Some(path) = &params.dump {
        let written = crate::file::export_records(path, &sweep.records)
            .wrap_err_with(|| format!("writing {}", path.display()))?;
        eprintln!("Wrote {}", written.display());
    }

    let mut problems = 0usize;

    if let Some(check) = &params.sort {
        let values: Vec<&str> = sweep.records.iter().map(|r| r.get(&check.column).unwrap_or("")).collect();
        match sort::check_order(&values, check.kind, check.dir)? {
            None => eprintln!("{} is sorted {:?}", check.column, check.dir),
            Some(i) => {
                problems += 1;
                println!(
                    "Sort violation in {}: '{}' then '{}' (rows {} and {})",
                    check.column, values[i], values[i + 1], i + 1, i + 2
                );
            }
        }
    }

    let side_b = Envelope::success(UiPolicy::from_rows(&sweep.records)?);
    let side_a: Envelope<ApiPolicy> = crate::file::read_envelope(&params.api)?;
    if let Some(err) = side_a.error.as_deref() {
        logw!("{} envelope carries error: {err}", opts.recon.label_a);
    }

    let report = Reconciler::new(opts.recon.clone()).compare(&side_a, &side_b, &PolicyComparator);
    for line in &report {
        println!("{line}");
    }
    problems += report.len();

    // surface is parked on the last page now
    logd!("finished on page '{}'", surface.active_page_label()?);

    if problems == 0 {
        eprintln!("Reconciled {} record(s)", sweep.records.len());
        Ok(Outcome::Reconciled)
    } else {
        Ok(Outcome::Mismatched(problems))
    }
}
