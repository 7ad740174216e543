use anyhow::Result;
use sigwave::{SawtoothSignal, Signal, SineSignal};

#[test]
fn test_sawtooth_config_from_json() -> Result<()> {
    let saw: SawtoothSignal =
        serde_json::from_str(r#"{"frequency":2.0,"amplitude":0.5,"phase_offset":0.0}"#)?;
    assert_eq!(saw, SawtoothSignal::new(2.0, 0.5, 0.0));
    assert_eq!(saw.period()?, 0.5);
    Ok(())
}

#[test]
fn test_sine_config_survives_storage() -> Result<()> {
    let sine = SineSignal::new(440.0, 0.8, 1.5);
    let stored = serde_json::to_string(&sine)?;
    let restored: SineSignal = serde_json::from_str(&stored)?;
    assert_eq!(restored, sine);
    Ok(())
}
