use tweenline::{Tick, parse_script, render_svg, render_text};

const SCENE: &str = "\
canvas 200 70 360 360
shape R rectangle
shape C oval
motion R 1 200 200 50 100 255 0 0  10 200 200 50 100 255 0 0
motion R 10 200 200 50 100 255 0 0  50 300 300 50 100 255 0 0
motion C 6 440 70 120 60 0 0 255  20 440 70 120 60 0 0 255
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let timeline = parse_script(SCENE)?;

    for t in [0i64, 1, 10, 30, 50] {
        let shapes = timeline.shapes_at_tick(Tick(t))?;
        println!("tick {t}: {} shapes visible", shapes.len());
    }

    println!("\n{}\n", render_text(&timeline));
    println!("{}", render_svg(&timeline, 5)?);

    Ok(())
}
