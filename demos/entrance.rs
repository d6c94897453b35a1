use aligngrid::{
    Canvas, Grid, GridSpec, Margin, RetainedScene, TickScheduler, Ticks, TransitionScheduler,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let spec = GridSpec::from_text(
        "Akash",
        "Batash",
        Canvas {
            width: 640,
            height: 480,
        },
        Margin::default(),
    )?;
    let mut grid = Grid::new(spec)?;

    let mut surface = RetainedScene::new();
    let mut scheduler = TickScheduler::new();

    let _points = grid.draw_points(&mut surface)?;
    let lines = grid.draw_lines(&mut surface, &mut scheduler)?;
    println!("bound {} elements", surface.len());

    let id = lines.transition.expect("line phase schedules a transition");
    for _ in 0..4 {
        scheduler.advance(&mut surface, Ticks(250))?;
        println!(
            "t={} settled={}",
            scheduler.now().0,
            scheduler.settled(id)
        );
    }

    Ok(())
}
