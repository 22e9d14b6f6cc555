#[cfg(test)]
mod tests {
    use crate::commands::GeoscapeCommand;
    use crate::components::Contact;
    use crate::enums::*;
    use crate::events::GeoscapeEvent;
    use crate::state::{GeoscapeSnapshot, RadarView};
    use crate::types::{ContactId, GeoPosition, SiteId};

    /// Commands cross the UI boundary as internally tagged JSON.
    #[test]
    fn test_command_wire_format() {
        let cmd = GeoscapeCommand::SetBaseRadarLevel {
            site: SiteId(3),
            level: 2,
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "SetBaseRadarLevel");
        assert_eq!(json["site"], 3);
        assert_eq!(json["level"], 2);

        let parsed: GeoscapeCommand =
            serde_json::from_str(r#"{"type":"SetRadarOverlay","enabled":true}"#).unwrap();
        assert!(matches!(
            parsed,
            GeoscapeCommand::SetRadarOverlay { enabled: true }
        ));
    }

    #[test]
    fn test_event_wire_format() {
        let event = GeoscapeEvent::ContactDetected {
            contact: ContactId(1),
            position: GeoPosition::new(10.0, 20.0),
            sensored_by: vec![SiteId(0), SiteId(4)],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ContactDetected");
        assert_eq!(json["contact"], 1);
        assert_eq!(json["sensored_by"].as_array().map(|a| a.len()), Some(2));

        let back: GeoscapeEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_snapshot_any_contact_tracked() {
        let mut snapshot = GeoscapeSnapshot::default();
        assert!(!snapshot.any_contact_tracked());

        snapshot.radars.push(RadarView {
            site: SiteId(0),
            kind: RadarOwnerKind::Base,
            position: GeoPosition::default(),
            range: 24.0,
            tracking_range: 34.0,
            active: true,
            sensored: vec![],
        });
        assert!(!snapshot.any_contact_tracked());

        snapshot.radars[0].sensored.push(ContactId(0));
        assert!(snapshot.any_contact_tracked());
    }

    #[test]
    fn test_new_contact_is_visible_and_unknown() {
        let contact = Contact::new(GeoPosition::new(5.0, 5.0));
        assert!(contact.is_on_geoscape());
        assert!(!contact.detected);
        assert!(contact.flight.is_none());
    }

    #[test]
    fn test_static_owner_kinds() {
        assert!(RadarOwnerKind::Base.is_static());
        assert!(RadarOwnerKind::Installation.is_static());
        assert!(!RadarOwnerKind::Aircraft.is_static());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(InstallationStatus::default(), InstallationStatus::UnderConstruction);
        assert_eq!(AircraftStatus::default(), AircraftStatus::Home);
        assert_eq!(ClockState::default(), ClockState::Running);
    }
}
