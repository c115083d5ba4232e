use speechwav::speech::DEFAULT_SAMPLE_RATE;
use std::process;

fn run() -> speechwav::Result<()> {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: speechwav <input.b64> [output.wav] [sample_rate]");
            process::exit(2);
        }
    };
    let output = args.next().unwrap_or_else(|| "output.wav".to_string());
    let sample_rate = match args.next() {
        Some(rate) => rate.parse().unwrap_or_else(|_| {
            eprintln!("invalid sample rate: {}", rate);
            process::exit(2);
        }),
        None => DEFAULT_SAMPLE_RATE,
    };

    let payload = std::fs::read_to_string(&input)?;
    let samples = speechwav::samples_from_base64(payload.trim())?;
    let wav = speechwav::encode_wav(&samples, sample_rate)?;
    std::fs::write(&output, &wav)?;

    tracing::info!(
        input = %input,
        output = %output,
        samples = samples.len(),
        seconds = samples.len() as f64 / f64::from(sample_rate),
        "wrote wav"
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
