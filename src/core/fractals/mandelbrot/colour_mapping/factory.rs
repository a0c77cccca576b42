use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{dusk_gradient::MandelbrotDuskGradient, slate_gradient::MandelbrotSlateGradient},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::DuskGradient => {
            Box::new(MandelbrotDuskGradient::new(max_iterations))
        }
        MandelbrotColourMapKinds::SlateGradient => {
            Box::new(MandelbrotSlateGradient::new(max_iterations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
    use crate::core::data::colour::Colour;
    use crate::core::fractals::mandelbrot::algorithm::BOUNDED;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKinds::ALL.first(),
            Some(&MandelbrotColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 1000);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in MandelbrotColourMapKinds::ALL {
            let map = mandelbrot_colour_map_factory(kind, 1000);
            assert_eq!(map.display_name(), kind.display_name());
            assert_eq!(kind.to_string(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = MandelbrotColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn bounded_is_black_for_every_kind_and_budget() {
        for &kind in MandelbrotColourMapKinds::ALL {
            for max_iterations in [0, 1, 2, 50, 1000] {
                let map = mandelbrot_colour_map_factory(kind, max_iterations);
                assert_eq!(map.map(BOUNDED), Colour::BLACK);
            }
        }
    }
}
