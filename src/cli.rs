// src/cli.rs
//
// Flag parsing and the CLI run path. Searches the dataset and prints the
// matching sections as CSV/TSV, paginated like the GUI (or all at once
// with --page 0).

use std::{env, error::Error, path::PathBuf};

use crate::catalog::Catalog;
use crate::config::consts::{CAMPUSES, DATA_URL, PAGE_SIZE};
use crate::csv::{self, Delim};
use crate::paginate;
use crate::search;

pub struct Params {
    pub query: String,
    pub campus: String,
    /// 1-based; 0 means "all pages".
    pub page: usize,
    pub page_size: usize,
    pub file: Option<PathBuf>,
    pub url: String,
    pub format: Delim,
    pub out: Option<PathBuf>,
    pub list_campuses: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            query: s!(),
            campus: s!(),
            page: 0,
            page_size: PAGE_SIZE,
            file: None,
            url: s!(DATA_URL),
            format: Delim::Tsv,
            out: None,
            list_campuses: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::default();
    parse_cli(&mut params)?;

    if params.list_campuses {
        for c in CAMPUSES {
            println!("{c}");
        }
        return Ok(());
    }

    let catalog = match &params.file {
        Some(path) => Catalog::load_file(path)?,
        None => Catalog::fetch(&params.url)?,
    };

    let view = search::filter(&catalog, &params.query, &params.campus);

    let range = if params.page == 0 {
        0..view.len()
    } else {
        let total = paginate::total_pages(view.len(), params.page_size);
        let page = paginate::clamp_page(params.page, total);
        paginate::page_bounds(view.len(), page, params.page_size)
    };

    let rows = range.len();
    let sep = params.format.sep();
    let mut buf: Vec<u8> = Vec::new();
    let headers: Vec<String> = csv::EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
    csv::write_row(&mut buf, &headers, sep)?;
    for i in range {
        if let Some(sec) = view.section(i) {
            csv::write_row(&mut buf, &csv::section_row(&view, sec), sep)?;
        }
    }

    match &params.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, &buf)?;
            eprintln!("Wrote {} section(s) to {}", rows, path.display());
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&buf)?;
        }
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-q" | "--query" => params.query = args.next().ok_or("Missing value for --query")?,
            "-c" | "--campus" => params.campus = args.next().ok_or("Missing value for --campus")?,
            "-p" | "--page" => params.page = args.next().ok_or("Missing value for --page")?.parse()?,
            "--page-size" => {
                let v: usize = args.next().ok_or("Missing value for --page-size")?.parse()?;
                if v == 0 { return Err("Page size must be at least 1".into()); }
                params.page_size = v; }
            "--file" => params.file = Some(PathBuf::from(args.next().ok_or("Missing value for --file")?)),
            "--url" => params.url = args.next().ok_or("Missing value for --url")?,
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--list-campuses" => params.list_campuses = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
