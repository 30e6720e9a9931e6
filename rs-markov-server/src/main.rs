use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};

use log::{info, warn};
use serde::Deserialize;
use rs_markov_core::io::{get_filename, list_files, normalize_folder, read_source};
use rs_markov_core::model::generate_options::{DEFAULT_SAMPLE_SIZE, DEFAULT_WORDS_COUNT};
use rs_markov_core::{generate, GenerateError, GenerateOptions};

/// Address used when `RS_MARKOV_BIND` is not set
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Corpus folder used when `RS_MARKOV_DATA` is not set
const DEFAULT_DATA: &str = "./data";

/// Largest `words_count` accepted when `RS_MARKOV_MAX_WORDS` is not set
const DEFAULT_MAX_WORDS: usize = 10_000;

/// Struct representing query parameters for the `GET /v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	corpus: Option<String>,
	words_count: Option<usize>,
	sample_size: Option<usize>,
	start: Option<String>
}

struct SharedData {
	data_dir: PathBuf,
	max_words: usize
}

impl SharedData {
	/// Refuses walks longer than the configured maximum.
	fn check_words_count(&self, words_count: usize) -> Result<(), String> {
		if words_count > self.max_words {
			return Err(format!("words_count must not exceed {}", self.max_words));
		}
		Ok(())
	}
}

impl GenerateParams {
	/// Resolves the corpus file inside the data folder.
	///
	/// Names are plain file stems, anything looking like a path is refused.
	fn corpus_path(&self, data_dir: &Path) -> Result<PathBuf, String> {
		match self.corpus.as_deref().map(str::trim) {
			None | Some("") => Err("Missing or empty corpus name".into()),
			Some(name) if name.contains(['/', '\\']) || name.contains("..") => {
				Err("Corpus name must not contain a path".into())
			}
			Some(name) => Ok(data_dir.join(format!("{}.txt", name))),
		}
	}

	/// Builds generation options over the loaded source, with library defaults.
	fn options(&self, source: String) -> GenerateOptions {
		GenerateOptions {
			source,
			start: self.start.clone(),
			words_count: self.words_count.unwrap_or(DEFAULT_WORDS_COUNT),
			sample_size: self.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE),
		}
	}
}

/// Maps a generation outcome to a response. Invalid options are client errors.
fn generated_response(result: Result<String, GenerateError>) -> HttpResponse {
	match result {
		Ok(text) => HttpResponse::Ok().body(text),
		Err(e) => {
			warn!("Rejected generation request: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// Reads the words limit from `RS_MARKOV_MAX_WORDS`, falling back to the default.
fn max_words_from_env() -> usize {
	match env::var("RS_MARKOV_MAX_WORDS") {
		Ok(value) => value.trim().parse().unwrap_or_else(|_| {
			warn!("Ignoring invalid RS_MARKOV_MAX_WORDS={value:?}, using {DEFAULT_MAX_WORDS}");
			DEFAULT_MAX_WORDS
		}),
		Err(_) => DEFAULT_MAX_WORDS,
	}
}

/// GET /v1/generate
///
/// Generates text from a corpus stored in the data folder.
/// The transition table is trained for each request.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let path = match query.corpus_path(&data.data_dir) {
		Ok(p) => p,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};
	if let Err(e) = data.check_words_count(query.words_count.unwrap_or(DEFAULT_WORDS_COUNT)) {
		return HttpResponse::BadRequest().body(e);
	}

	let params = query.into_inner();
	let outcome = web::block(move || -> std::io::Result<Result<String, GenerateError>> {
		let source = read_source(&path)?;
		Ok(generate(&params.options(source)))
	})
	.await;

	match outcome {
		Ok(Ok(result)) => generated_response(result),
		Ok(Err(e)) if e.kind() == ErrorKind::NotFound => HttpResponse::NotFound().body("Unknown corpus"),
		Ok(Err(e)) => HttpResponse::InternalServerError().body(format!("Failed to read corpus: {e}")),
		Err(_) => HttpResponse::InternalServerError().body("Generation task failed")
	}
}

/// POST /v1/generate
///
/// Generates text from the source given in the JSON body.
#[post("/v1/generate")]
async fn post_generated(data: web::Data<SharedData>, options: web::Json<GenerateOptions>) -> impl Responder {
	if let Err(e) = data.check_words_count(options.words_count) {
		return HttpResponse::BadRequest().body(e);
	}

	let options = options.into_inner();
	match web::block(move || generate(&options)).await {
		Ok(result) => generated_response(result),
		Err(_) => HttpResponse::InternalServerError().body("Generation task failed")
	}
}

/// GET /v1/corpora
///
/// Lists the corpora available in the data folder (names without extension).
#[get("/v1/corpora")]
async fn get_corpora(data: web::Data<SharedData>) -> impl Responder {
	let files = match list_files(&data.data_dir, "txt") {
		Ok(files) => files,
		Err(_) => return HttpResponse::InternalServerError().body("Failed to list corpora")
	};

	let names: Vec<String> = files.iter().filter_map(|file| get_filename(file).ok()).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

/// Main entry point for the server.
///
/// Reads its configuration from the environment and starts an Actix-web
/// HTTP server.
///
/// # Notes
/// - `RS_MARKOV_BIND` sets the address (default 127.0.0.1:5000).
/// - `RS_MARKOV_DATA` sets the corpus folder (default ./data).
/// - `RS_MARKOV_MAX_WORDS` caps `words_count` per request (default 10000).
/// - `RUST_LOG` sets the log level (default info).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let bind = env::var("RS_MARKOV_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());
	let data_dir = normalize_folder(&env::var("RS_MARKOV_DATA").unwrap_or_else(|_| DEFAULT_DATA.to_owned()));
	let max_words = max_words_from_env();
	info!("Serving corpora from {} on {} (at most {} words)", data_dir.display(), bind, max_words);

	let shared_data = web::Data::new(SharedData { data_dir, max_words });

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(post_generated)
			.service(get_corpora)
	})
		.bind(bind)?
		.run()
		.await
}
