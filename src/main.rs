use anyhow::Result;
use thermal_comfort::{ComfortInputs, pmv_elevated_airspeed, universal_thermal_climate_index};

fn main() -> Result<()> {
    // An office at 19 C with warmer surrounding surfaces and a ceiling fan.
    let indoor = ComfortInputs::new(19.0, 23.0, 0.5, 60.0, 1.5, 0.4);
    let result = pmv_elevated_airspeed(&indoor)?;
    println!("indoor inputs: {}", serde_json::to_string(&indoor)?);
    println!("indoor result: {}", serde_json::to_string(&result)?);

    // A breezy spring day outdoors.
    let utci = universal_thermal_climate_index(20.0, 20.0, 3.0, 50.0);
    println!("outdoor UTCI:  {utci:.2} C");

    Ok(())
}
