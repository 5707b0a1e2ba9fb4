use argh::FromArgs;
use std::time::Instant;

use fastgauss::{
    image::{Image, ImageSize},
    imgproc::{
        filter::{gaussian_blur_fast_with, FastGaussianBlurConfig},
        parallel::ExecutionStrategy,
    },
};

#[derive(FromArgs)]
/// Blur a synthetic RGBA checkerboard and report statistics
struct Args {
    /// the image width in pixels
    #[argh(option, default = "640")]
    width: usize,

    /// the image height in pixels
    #[argh(option, default = "480")]
    height: usize,

    /// the size of a checkerboard cell in pixels
    #[argh(option, default = "16")]
    cell: usize,

    /// the sigma for the gaussian along x
    #[argh(option, default = "2.0")]
    sigma_x: f32,

    /// the sigma along y, defaults to sigma_x
    #[argh(option)]
    sigma_y: Option<f32>,

    /// the number of box filter passes
    #[argh(option, default = "3")]
    passes: usize,

    /// number of worker threads, 0 runs on the calling thread
    #[argh(option)]
    threads: Option<usize>,
}

fn checkerboard(
    size: ImageSize,
    cell: usize,
) -> Result<Image<u8, 4>, Box<dyn std::error::Error>> {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity(size.area() * 4);
    for y in 0..size.height {
        for x in 0..size.width {
            let on = (x / cell + y / cell) % 2 == 0;
            let v = if on { 255 } else { 0 };
            data.extend_from_slice(&[v, (x % 256) as u8, (y % 256) as u8, 255]);
        }
    }
    Ok(Image::new(size, data)?)
}

fn mean_abs_diff(a: &[u8], b: &[u8]) -> f64 {
    let total = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs() as u64)
        .sum::<u64>();
    total as f64 / a.len().max(1) as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };

    let strategy = match args.threads {
        None => ExecutionStrategy::Parallel,
        Some(0) => ExecutionStrategy::Serial,
        Some(n) => ExecutionStrategy::Fixed(n),
    };

    let config = FastGaussianBlurConfig::new(args.sigma_x)
        .with_sigma_xy(args.sigma_x, args.sigma_y.unwrap_or(args.sigma_x))
        .with_passes(args.passes)
        .with_strategy(strategy);
    config.validate()?;

    let image = checkerboard(size, args.cell)?;
    log::info!("blurring {} with {:?}", size, config);

    let start = Instant::now();
    let blurred = gaussian_blur_fast_with(&image, &config)?;
    let elapsed = start.elapsed();

    println!("size: {}", blurred.size());
    println!("elapsed: {:?}", elapsed);

    let blurred = blurred.into_vec();
    println!(
        "mean absolute change: {:.3}",
        mean_abs_diff(image.as_slice(), &blurred)
    );

    Ok(())
}
