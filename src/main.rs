use image::error::ImageError;

use ptree_img::{BuildError, PartitionTree};

use tracing_subscriber::EnvFilter;

/// Helper function for `main`.
fn error_exit(msg: &str, code: i32) -> ! {
	eprintln!("{}", msg);
	std::process::exit(code)
}

/// `clap`-based CLI for approximating images with partition trees.
///
/// May exit process with status code if there are errors:
///
/// 1: `clap` error
///
/// 2: invalid arguments
///
/// 3: file I/O issues
///
/// 4: invalid image data
///
/// 5: computation limits exceeded
///
/// 10: other, potentially unknown error
fn main() {
	let clap_matches = clap::App::new("ptree_img")
		.version("0.1.0")
		.author("vkcz")
		.about("Renders an image through a binary partition tree, optionally pruned and mirrored.")
		.arg_from_usage("-p, --prune=[TOL] 'Collapse regions whose pixels are all within TOL of the region average'")
		.arg_from_usage("-x, --flip-horizontal 'Mirror the output left to right'")
		.arg_from_usage("-y, --flip-vertical 'Mirror the output top to bottom'")
		.arg_from_usage("-v, --verbose 'Log tree statistics to stderr'")
		.arg_from_usage("<INPUT> 'Path to input image'")
		.arg_from_usage("[OUTPUT] 'Path to output image; defaults to INPUT with a .ptree.png extension'")
		.get_matches();

	let filter = if clap_matches.is_present("verbose") {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	let input_path = match clap_matches.value_of("INPUT") {
		Some(p) => p,
		None => error_exit("Missing input path", 1),
	};
	let tolerance = match clap_matches.value_of("prune").map(str::parse::<f64>) {
		None => None,
		Some(Ok(t)) if t >= 0. => Some(t),
		Some(_) => error_exit("Prune tolerance must be a non-negative number", 2),
	};

	let source = match image::open(input_path) {
		Ok(i) => i,
		Err(e) => {
			let (msg, code) = match e {
				ImageError::Decoding(_) => ("Invalid image data", 4),
				ImageError::Limits(_) => ("Computation limits exceeded", 5),
				ImageError::IoError(_) => ("File not found or could not be read", 3),
				_ => ("An error occurred", 10)
			};
			error_exit(msg, code)
		}
	}.into_rgba8();

	let mut tree = match PartitionTree::build(&source) {
		Ok(t) => t,
		Err(BuildError::ZeroWidth) | Err(BuildError::ZeroHeight) =>
			error_exit("Input image has no pixels", 4),
	};
	if let Some(t) = tolerance {
		// A freshly built tree has never been pruned
		if tree.prune(t).is_err() {
			error_exit("An error occurred", 10);
		}
	}
	if clap_matches.is_present("flip-horizontal") {
		tree.flip_horizontal();
	}
	if clap_matches.is_present("flip-vertical") {
		tree.flip_vertical();
	}
	tracing::info!(nodes = tree.size(), leaves = tree.num_leaves(), depth = tree.depth(), "rendering");

	let mut output = image::RgbaImage::new(source.width(), source.height());
	if let Err(e) = tree.render_into(&mut output) {
		error_exit(&e.to_string(), 10);
	}
	let default_output = input_path.rsplitn(2, '.').last().unwrap_or(input_path).to_string() + ".ptree.png";
	match output.save(clap_matches.value_of("OUTPUT").unwrap_or(&default_output)) {
		Ok(_) => (),
		Err(_) => error_exit("Could not save output", 3)
	}
}
