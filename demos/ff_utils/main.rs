//! FF (MQDB container) CLI Utility
//!
//! A command-line tool for inspecting `.ff` resource containers.
//!
//! # Features
//!
//! - **info**: Display header, table of contents and name list statistics
//! - **list**: List named records
//! - **extract**: Extract records by name or id (single, multiple, or all)
//! - **dump**: Hex dump the start of a record
//! - **index**: Show the `-INDEX.OPT` image and animation tables
//! - **images**: Show packed images from `-IMAGES.OPT`
//!
//! # Decoder Options
//!
//! Options can be loaded from a TOML file with `--config` and overridden
//! through `MQDB_READ_IMAGES` / `MQDB_CHECK_FRAME_SIZES`:
//!
//! ```toml
//! read_images = true
//! check_frame_sizes = false
//! ```
//!
//! # Usage Examples
//!
//! ```bash
//! # Display information about a container
//! cargo run --example ff_utils -- info bin/Interf.ff
//!
//! # List records whose name contains "DLG" as JSON
//! cargo run --example ff_utils -- list bin/Interf.ff -p dlg --format json
//!
//! # Extract all records
//! cargo run --example ff_utils -- extract bin/Interf.ff --all -o output/
//!
//! # Hex dump a record by id
//! cargo run --example ff_utils -- dump bin/Interf.ff 2 --by-id
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info, warn};
use mqdb_rs::prelude::*;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let options = load_options(&cli.decoder)?;
	debug!("Decoder options: {:?}", options);

	match cli.command {
		Command::Info(args) => run_info(&args, options),
		Command::List(args) => run_list(&args, options),
		Command::Extract(args) => run_extract(&args, options),
		Command::Dump(args) => run_dump(&args, options),
		Command::Index(args) => run_index(&args, options),
		Command::Images(args) => run_images(&args, options),
	}
}

#[derive(Parser)]
#[command(name = "ff_utils")]
#[command(author = "mqdb-rs project")]
#[command(version)]
#[command(about = "MQDB (.ff) container utility - inspect, list, and extract records", long_about = None)]
struct Cli {
	#[command(flatten)]
	decoder: DecoderArgs,

	#[command(subcommand)]
	command: Command,
}

#[derive(Args)]
struct DecoderArgs {
	/// TOML file with decoder options
	#[arg(short, long, global = true, value_name = "FILE", env = "MQDB_CONFIG")]
	config: Option<PathBuf>,

	/// Fail when an animation mixes frame sizes
	#[arg(long, global = true)]
	strict: bool,

	/// Skip decoding -IMAGES.OPT
	#[arg(long, global = true)]
	metadata_only: bool,
}

#[derive(Subcommand)]
enum Command {
	/// Display container information and statistics
	Info(InputArgs),
	/// List named records
	List(ListArgs),
	/// Extract records to a directory
	Extract(ExtractArgs),
	/// Hex dump the start of a record
	Dump(DumpArgs),
	/// Show the -INDEX.OPT tables
	Index(IndexArgs),
	/// Show packed images
	Images(ImagesArgs),
}

#[derive(Args)]
struct InputArgs {
	/// Path to the .ff file
	#[arg(value_name = "FILE")]
	input: PathBuf,
}

#[derive(Args)]
struct ListArgs {
	/// Path to the .ff file
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// Filter by name pattern (case-insensitive)
	#[arg(short = 'p', long, value_name = "PATTERN")]
	filter: Option<String>,

	/// Sort by field
	#[arg(short, long, value_enum, default_value = "name")]
	sort: SortOrder,

	/// Output format
	#[arg(short, long, value_enum, default_value = "table")]
	format: OutputFormat,

	/// Also show name list entries that were skipped
	#[arg(long)]
	skipped: bool,
}

#[derive(Args)]
struct ExtractArgs {
	/// Path to the .ff file
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// Records to extract (names, or ids with --by-id)
	#[arg(value_name = "RECORDS")]
	records: Vec<String>,

	/// Treat RECORDS as numeric record ids
	#[arg(long)]
	by_id: bool,

	/// Extract all named records
	#[arg(short, long)]
	all: bool,

	/// Output directory
	#[arg(short, long, value_name = "OUTPUT_DIR", default_value = "extracted")]
	output: PathBuf,
}

#[derive(Args)]
struct DumpArgs {
	/// Path to the .ff file
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// Record name, or id with --by-id
	#[arg(value_name = "RECORD")]
	record: String,

	/// Treat RECORD as a numeric record id
	#[arg(long)]
	by_id: bool,

	/// Number of bytes to dump
	#[arg(short, long, value_name = "BYTES", default_value_t = 256)]
	length: usize,
}

#[derive(Args)]
struct IndexArgs {
	/// Path to the .ff file
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// Output format
	#[arg(short, long, value_enum, default_value = "table")]
	format: OutputFormat,
}

#[derive(Args)]
struct ImagesArgs {
	/// Path to the .ff file
	#[arg(value_name = "FILE")]
	input: PathBuf,

	/// Show every frame
	#[arg(long)]
	frames: bool,

	/// Show the first palette colours of every image
	#[arg(long, value_name = "COUNT")]
	palette: Option<u8>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortOrder {
	/// Sort by record name
	Name,
	/// Sort by record id
	Id,
	/// Sort by payload size
	Size,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
	/// Table format
	Table,
	/// JSON format
	Json,
	/// CSV format
	Csv,
}

/// Builds decoder options from the config file, the environment and flags
fn load_options(args: &DecoderArgs) -> Result<FfOptions> {
	let mut builder = config::Config::builder();

	if let Some(path) = &args.config {
		builder = builder.add_source(config::File::from(path.as_path()).required(true));
	}

	let settings = builder
		.add_source(config::Environment::with_prefix("MQDB").try_parsing(true))
		.build()
		.context("Failed to load decoder options")?;

	let mut options: FfOptions = settings.try_deserialize().context("Invalid decoder options")?;
	if args.strict {
		options.check_frame_sizes = true;
	}
	if args.metadata_only {
		options.read_images = false;
	}

	Ok(options)
}

fn open(input: &Path, options: FfOptions) -> Result<FfFile> {
	FfFile::open_with(input, options).with_context(|| format!("Failed to open {}", input.display()))
}

/// Resolves a record argument to its table of contents entry
fn resolve<'a>(ff: &'a FfFile, record: &str, by_id: bool) -> Result<&'a TocEntry> {
	if by_id {
		let id: RecordId = record.parse().with_context(|| format!("Invalid record id: {}", record))?;
		ff.find_toc_entry(id).with_context(|| format!("No record with id {}", id))
	} else {
		ff.find_by_name(record).with_context(|| format!("No record named {}", record))
	}
}

/// Handles the 'info' command
fn run_info(args: &InputArgs, options: FfOptions) -> Result<()> {
	let ff = open(&args.input, options)?;
	let file_size = fs::metadata(&args.input)?.len();

	let names = ff.name_list();
	let skipped = names.skipped().count();
	let payload_total: u64 = ff.toc().iter().map(|entry| entry.size as u64).sum();
	let allocated_total: u64 = ff.toc().iter().map(|entry| entry.size_allocated as u64).sum();

	println!("\n=== FF Container Information ===");
	println!("File: {}", args.input.display());
	println!("Header: {}", ff.header());
	println!("File Size: {} bytes ({:.2} MB)", file_size, file_size as f64 / 1024.0 / 1024.0);
	println!("Records: {}", ff.toc().len());
	println!("Payload: {} bytes, {} allocated", payload_total, allocated_total);
	println!("Names: {} resolved, {} skipped", names.len(), skipped);

	println!("\n=== Packed Images ===");
	println!("Indexed Images: {}", ff.index().images.len());
	println!("Indexed Animations: {}", ff.index().animations.len());
	if options.read_images {
		println!("Decoded Images: {}", ff.packed_images().len());
	} else {
		println!("Decoded Images: skipped");
	}

	Ok(())
}

/// Handles the 'list' command
fn run_list(args: &ListArgs, options: FfOptions) -> Result<()> {
	let ff = open(&args.input, options)?;

	let mut entries: Vec<(&str, &TocEntry)> = ff
		.name_list()
		.iter()
		.filter_map(|(name, id)| ff.find_toc_entry(id).map(|entry| (name, entry)))
		.collect();

	if let Some(pattern) = &args.filter {
		let pattern_lower = pattern.to_lowercase();
		entries.retain(|(name, _)| name.to_lowercase().contains(&pattern_lower));
	}

	match args.sort {
		SortOrder::Name => {}
		SortOrder::Id => entries.sort_by_key(|(_, entry)| entry.record_id),
		SortOrder::Size => entries.sort_by_key(|(_, entry)| entry.size),
	}

	match args.format {
		OutputFormat::Table => {
			println!("\n{:<40} | {:>8} | {:>10} | {:>10}", "Name", "Id", "Size", "Allocated");
			println!("{:-<40}-+-{:-<8}-+-{:-<10}-+-{:-<10}", "", "", "", "");
			for (name, entry) in &entries {
				println!(
					"{:<40} | {:>8} | {:>10} | {:>10}",
					name, entry.record_id, entry.size, entry.size_allocated
				);
			}
			println!("\nTotal: {} records", entries.len());
		}
		OutputFormat::Json => {
			let json_entries: Vec<_> = entries
				.iter()
				.map(|(name, entry)| {
					serde_json::json!({
						"name": name,
						"id": entry.record_id,
						"size": entry.size,
						"size_allocated": entry.size_allocated,
						"offset": entry.offset,
					})
				})
				.collect();
			println!("{}", serde_json::to_string_pretty(&json_entries)?);
		}
		OutputFormat::Csv => {
			println!("name,id,size,size_allocated,offset");
			for (name, entry) in &entries {
				println!(
					"{},{},{},{},{}",
					name, entry.record_id, entry.size, entry.size_allocated, entry.offset
				);
			}
		}
	}

	if args.skipped {
		println!("\n=== Skipped Names ===");
		for entry in ff.name_list().skipped() {
			println!("{:<40} -> {:>8} ({:?})", entry.name, entry.record_id, entry.resolution);
		}
	}

	Ok(())
}

/// Handles the 'extract' command
fn run_extract(args: &ExtractArgs, options: FfOptions) -> Result<()> {
	if args.all == !args.records.is_empty() {
		bail!("Specify either record names or --all");
	}

	let ff = open(&args.input, FfOptions {
		read_images: false,
		..options
	})?;

	let mut targets: Vec<(String, &TocEntry)> = Vec::new();
	if args.all {
		for (name, id) in ff.name_list().iter() {
			if let Some(entry) = ff.find_toc_entry(id) {
				targets.push((name.to_string(), entry));
			}
		}
	} else {
		for record in &args.records {
			targets.push((record.clone(), resolve(&ff, record, args.by_id)?));
		}
	}

	fs::create_dir_all(&args.output)
		.with_context(|| format!("Failed to create {}", args.output.display()))?;

	let mut data = Vec::new();
	let mut extracted = 0usize;
	for (name, entry) in targets {
		if let Err(e) = ff.read_record_into(entry, &mut data) {
			warn!("Failed to read record {} ({}): {}", name, entry.record_id, e);
			continue;
		}

		// names may carry path separators
		let file_name = name.replace(['/', '\\'], "_");
		let output_path = args.output.join(&file_name);
		fs::write(&output_path, &data).with_context(|| format!("Failed to write {}", output_path.display()))?;

		info!("  {} ({} bytes) -> {}", name, data.len(), output_path.display());
		extracted += 1;
	}

	info!("Extracted {} records to {}", extracted, args.output.display());
	Ok(())
}

/// Handles the 'dump' command
fn run_dump(args: &DumpArgs, options: FfOptions) -> Result<()> {
	let ff = open(&args.input, FfOptions {
		read_images: false,
		..options
	})?;

	let entry = resolve(&ff, &args.record, args.by_id)?;
	let data = ff.read_record(entry)?;
	let shown = &data[..data.len().min(args.length)];

	println!("Record {} ({} bytes, showing {})", entry.record_id, data.len(), shown.len());
	for (line, chunk) in shown.chunks(16).enumerate() {
		let text: String =
			chunk.iter().map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' }).collect();
		println!("{:08X}  {:<32}  {}", line * 16, hex::encode(chunk), text);
	}

	Ok(())
}

/// Handles the 'index' command
fn run_index(args: &IndexArgs, options: FfOptions) -> Result<()> {
	let ff = open(&args.input, options)?;
	let index = ff.index();

	match args.format {
		OutputFormat::Table => {
			println!("\n=== Images ({}) ===", index.images.len());
			for entry in index.images.iter() {
				println!(
					"{:>8} {:<40} @ {:#010X} ({} bytes)",
					entry.id, entry.name, entry.info.offset, entry.info.size
				);
			}

			println!("\n=== Animations ({}) ===", index.animations.len());
			for entry in index.animations.iter() {
				println!("{:<49} @ {:#010X} ({} bytes)", entry.name, entry.info.offset, entry.info.size);
			}
		}
		OutputFormat::Json => {
			let images: Vec<_> = index
				.images
				.iter()
				.map(|e| serde_json::json!({ "id": e.id, "name": e.name, "offset": e.info.offset, "size": e.info.size }))
				.collect();
			let animations: Vec<_> = index
				.animations
				.iter()
				.map(|e| serde_json::json!({ "name": e.name, "offset": e.info.offset, "size": e.info.size }))
				.collect();
			let json = serde_json::json!({ "images": images, "animations": animations });
			println!("{}", serde_json::to_string_pretty(&json)?);
		}
		OutputFormat::Csv => {
			println!("kind,id,name,offset,size");
			for e in index.images.iter() {
				println!("image,{},{},{},{}", e.id, e.name, e.info.offset, e.info.size);
			}
			for e in index.animations.iter() {
				println!("animation,,{},{},{}", e.name, e.info.offset, e.info.size);
			}
		}
	}

	Ok(())
}

/// Handles the 'images' command
fn run_images(args: &ImagesArgs, options: FfOptions) -> Result<()> {
	if !options.read_images {
		bail!("Packed images are disabled by the current options");
	}

	let ff = open(&args.input, options)?;

	for (offset, image) in ff.packed_images() {
		let kind = if image.is_animation() {
			"animation"
		} else {
			"image"
		};
		println!("{:#010X}: {} with {} frame(s)", offset, kind, image.frames.len());

		if args.frames {
			for frame in &image.frames {
				let marker = if frame.parts_in_bounds() {
					""
				} else {
					" [parts out of bounds]"
				};
				println!("    {}{}", frame, marker);
			}
		}

		if let Some(count) = args.palette {
			println!("    palette: {}", palette_preview(&image.palette, count));
		}
	}

	println!("\nTotal: {} packed images", ff.packed_images().len());
	Ok(())
}

/// Formats the first `count` palette colours as `#RRGGBB` values
fn palette_preview(palette: &Palette, count: u8) -> String {
	let colors: Vec<String> = palette.colors().take(count as usize).map(|color| color.to_string()).collect();
	colors.join(" ")
}
