use ladder_bode::errors::LadderBodeError;
use ladder_bode::ladder::{Branch, LadderNetwork};
use ladder_bode::sweep::SweepPlan;

fn main() -> Result<(), LadderBodeError> {
    // First-order RC low-pass: 1 kOhm into 159 pF, corner near 1 MHz.
    let mut ladder = LadderNetwork::new(Branch::Capacitor(159.0e-12), 1.0); // 159 pF
    ladder.add_series(Branch::Resistor(1.0e3)); // 1 kOhm

    let plan = SweepPlan::new(1.0e3, 1.0e9, 200)?;
    println!("freq(Hz), |H|(dB), phase(deg)");
    for p in plan.bode(|s| ladder.transfer_function(s)) {
        println!("{:.6e}, {:.6e}, {:.6e}", p.frequency_hz, p.magnitude_db, p.phase_deg);
    }
    Ok(())
}
