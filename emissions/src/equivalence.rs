/// Describe a mass of CO₂e in everyday terms.
pub fn co2_equivalence(kg_co2: f64) -> String {
    if kg_co2 < 10.0 {
        format!(
            "Equivalent to charging your smartphone {} times",
            (kg_co2 * 250.0).round() as i64
        )
    } else if kg_co2 < 50.0 {
        format!(
            "Equivalent to driving a car for {} km",
            (kg_co2 / 0.12).round() as i64
        )
    } else if kg_co2 < 200.0 {
        format!("Equivalent to a {} hour flight", (kg_co2 / 150.0).round() as i64)
    } else {
        format!(
            "Equivalent to the electricity used by an average home for {} days",
            (kg_co2 / 8.0).round() as i64
        )
    }
}
