use gridmdp::*;

#[allow(dead_code)]
pub fn reference_world() -> GridWorld {
    GridWorld::new(GridConfig::reference()).unwrap()
}

/// One line per state: `s cell | next:reward[*] ...`, `*` marking terminal outcomes.
#[allow(dead_code)]
pub fn render_table(gw: &GridWorld) -> String {
    let rows = gw.layout().rows();
    (0..gw.n_s())
        .map(|s| {
            let (row, col) = state_position(s, rows);
            let cells = (0..gw.n_a())
                .map(|a| {
                    gw.outcomes(s, a)
                        .unwrap()
                        .iter()
                        .map(|t| {
                            format!(
                                "{:02}:{:+}{}",
                                t.next_state,
                                t.reward as i64,
                                if t.done { "*" } else { "" }
                            )
                        })
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect::<Vec<_>>();
            format!(
                "{s:02} {} | {}",
                gw.layout().cell(row, col).unwrap(),
                cells.join("  ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
