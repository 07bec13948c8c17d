/// Phase label and temperature for each step of a heat-then-cool run.
pub fn anneal_schedule(heating: usize, cooling: usize, peak: f64) -> Vec<(&'static str, f64)> {
    let heat = (0..heating).map(move |step| {
        let fraction = (step + 1) as f64 / heating.max(1) as f64;
        ("Heating", peak * fraction)
    });
    let cool = (0..cooling).map(move |step| {
        let fraction = 1.0 - (step + 1) as f64 / (cooling + 1) as f64;
        ("Cooling", peak * fraction)
    });
    heat.chain(cool).collect()
}
