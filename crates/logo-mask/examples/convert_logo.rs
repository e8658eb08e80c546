use logo_mask::{convert_file, ConvertOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("Usage: convert_logo <input_image> <output_png>");
        return Ok(());
    };

    let report = convert_file(&ConvertOptions::new(input, output))?;
    match report.bbox {
        Some(bbox) => println!(
            "trimmed {}x{} -> {}x{} at {}",
            report.source_width, report.source_height, report.output_width, report.output_height, bbox
        ),
        None => println!("no visible pixels, wrote the image uncropped"),
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
