use std::env;

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};

use serde::Deserialize;
use rs_randstr_core::{CharacterGroup, Error, GenerationBuilder, RandomStringGenerator};

/// Maximum number of strings returned by a single request.
const MAX_COUNT: usize = 100;

/// Server settings read from the environment.
///
/// - `RANDSTR_HOST`: bind address (default `127.0.0.1`)
/// - `RANDSTR_PORT`: bind port (default `5000`)
struct ServerConfig {
	host: String,
	port: u16,
}

impl ServerConfig {
	fn from_env() -> Self {
		let host = env::var("RANDSTR_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
		let port = match env::var("RANDSTR_PORT") {
			Ok(value) => value.parse().unwrap_or_else(|_| {
				warn!("Ignoring invalid RANDSTR_PORT '{}'", value);
				5000
			}),
			Err(_) => 5000,
		};
		Self { host, port }
	}
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	groups: Option<String>, // comma separated group names
	allow: Option<String>, // extra characters, percent-encoded
	exclude: Option<String>, // percent-encoded
	each_once: Option<bool>,
	no_similar: Option<bool>,
	secure: Option<bool>,
	count: Option<usize>,
}

impl GenerateParams {
	/// Translates the query into builder steps.
	fn builder(&self) -> Result<GenerationBuilder, Error> {
		let mut builder = GenerationBuilder::new();
		if let Some(length) = self.length {
			builder = builder.with_length(length);
		}
		if let Some(groups) = &self.groups {
			builder = builder.allow_group(groups.parse::<CharacterGroup>()?);
		}
		if let Some(allow) = &self.allow {
			let chars: Vec<char> = allow.chars().collect();
			builder = if self.groups.is_some() {
				builder.and_allow_characters(&chars)
			} else {
				builder.allow_characters(&chars)
			};
		}
		if let Some(exclude) = &self.exclude {
			builder = builder.exclude_characters(&exclude.chars().collect::<Vec<_>>());
		}
		if self.each_once.unwrap_or(false) {
			builder = builder.each_character_must_occur_at_least_once();
		}
		if self.no_similar.unwrap_or(false) {
			builder = builder.exclude_similar_looking_characters();
		}
		Ok(builder)
	}
}

fn error_response(error: Error) -> HttpResponse {
	match error {
		Error::Entropy(_) => HttpResponse::InternalServerError().body(error.to_string()),
		_ => HttpResponse::BadRequest().body(error.to_string()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `count` random strings (default 1) and returns them one per line.
///
/// `allow` and `exclude` are decoded as form values: every character is taken
/// literally once decoded, and a raw `+` stands for a space. Symbols with a
/// meaning in query strings must be percent-encoded, e.g. `%2B` for `+`,
/// `%26` for `&`, `%25` for `%` and `%23` for `#`.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1);
	if count == 0 || count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("count must be between 1 and {}", MAX_COUNT));
	}

	let options = match query.builder().and_then(GenerationBuilder::build) {
		Ok(options) => options,
		Err(e) => return error_response(e),
	};

	let generator = if query.secure.unwrap_or(true) {
		RandomStringGenerator::cryptographic()
	} else {
		RandomStringGenerator::pseudo_random()
	};

	let mut lines = Vec::with_capacity(count);
	for _ in 0..count {
		match generator.generate_options(&options) {
			Ok(s) => lines.push(s),
			Err(e) => return error_response(e),
		}
	}

	HttpResponse::Ok().body(lines.join("\n"))
}

/// HTTP GET endpoint `/v1/groups`
///
/// Lists every group name with the number of characters it contains.
#[get("/v1/groups")]
async fn get_groups() -> impl Responder {
	let lines: Vec<String> = CharacterGroup::names()
		.map(|(name, group)| format!("{}: {}", name, group.chars().map(|c| c.len()).unwrap_or(0)))
		.collect();
	HttpResponse::Ok().body(lines.join("\n"))
}

/// Main entry point for the server.
///
/// Generators are created per request, so handlers share no state and need
/// no lock.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = ServerConfig::from_env();
	info!("Listening on {}:{}", config.host, config.port);

	HttpServer::new(|| {
		App::new()
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_groups)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
