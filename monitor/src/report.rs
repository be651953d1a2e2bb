use open_notify_client::Astronaut;

use crate::station::StationPosition;

/// Crew report: one name/spacecraft pair per astronaut, in API order, with
/// a trailing head count.
pub fn astronaut_report(astronauts: &[Astronaut]) -> String {
    let mut report = String::from("Astronaut Information:\n\n");
    for astronaut in astronauts {
        report.push_str(&format!(
            "Name: {}\nSpacecraft: {}\n\n",
            astronaut.name, astronaut.craft
        ));
    }
    report.push_str(&format!(
        "Total astronauts in space: {}\n",
        astronauts.len()
    ));
    report
}

/// Location report. Latitude and longitude are reproduced exactly as the
/// API served them.
pub fn location_report(position: &StationPosition) -> String {
    format!(
        "Current ISS Location:\n\nLatitude: {}\nLongitude: {}\nTime: {}\n",
        position.latitude, position.longitude, position.time
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn astronaut(name: &str, craft: &str) -> Astronaut {
        Astronaut {
            name: name.into(),
            craft: craft.into(),
        }
    }

    #[test]
    fn crew_report_lists_every_astronaut_in_order() {
        let report = astronaut_report(&[
            astronaut("A", "ISS"),
            astronaut("B", "ISS"),
            astronaut("C", "Tiangong"),
        ]);

        assert_eq!(report.matches("Name:").count(), 3);
        assert_eq!(report.matches("Spacecraft:").count(), 3);
        assert!(report.ends_with("Total astronauts in space: 3\n"));

        // order preserved exactly as received
        let a = report.find("Name: A").unwrap();
        let b = report.find("Name: B").unwrap();
        let c = report.find("Name: C").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn empty_crew_still_reports_a_count() {
        let report = astronaut_report(&[]);
        assert_eq!(report.matches("Name:").count(), 0);
        assert!(report.ends_with("Total astronauts in space: 0\n"));
    }

    #[test]
    fn location_report_is_verbatim() {
        let report = location_report(&StationPosition {
            latitude: "51.1".into(),
            longitude: "-12.3".into(),
            lat_deg: 51.1,
            lon_deg: -12.3,
            time: "May 01, 2020 *** 01:14:25 AM".into(),
        });

        assert!(report.contains("Latitude: 51.1"));
        assert!(report.contains("Longitude: -12.3"));
        assert!(report.contains("Time: May 01, 2020 *** 01:14:25 AM"));
    }
}
