use std::fs::File;
use std::io::{BufWriter, Write};

use ladder_bode::dataset::write_bode_text;
use ladder_bode::elliptic::SeventhOrderElliptic;
use ladder_bode::errors::LadderBodeError;
use ladder_bode::math::complex_frequency;
use ladder_bode::sweep::{BodePoint, SweepPlan};

fn main() -> Result<(), LadderBodeError> {
    let design = SeventhOrderElliptic::dds_reference();
    design.validate()?;
    let ladder = design.ladder();

    // 1 kHz .. 1 THz, 1000 log-spaced points.
    let plan = SweepPlan::new(1.0e3, 1.0e12, 1000)?;

    // Open the sink up front so a bad destination fails before the sweep.
    let file = File::create("bode_data.txt")?;
    let mut writer = BufWriter::new(file);

    let mut points = Vec::with_capacity(plan.points());
    for hz in plan.frequencies() {
        let h = ladder.transfer_function(complex_frequency(hz));
        println!("frequency: {:.2e} Hz, H(s): {:.2e} + j * {:.2e}", hz, h.re, h.im);
        points.push(BodePoint::from_response(hz, h));
    }

    write_bode_text(&mut writer, &points)?;
    writer.flush()?;
    Ok(())
}
