use hover_lift::BindReport;

#[test]
fn bound_excludes_skipped() {
	let report = BindReport { matched: 3, listeners: 4, skipped: 1 };
	assert_eq!(report.bound(), 2);
}

#[test]
fn bound_saturates() {
	let report = BindReport { matched: 1, listeners: 0, skipped: 2 };
	assert_eq!(report.bound(), 0);
}
