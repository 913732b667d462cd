use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError, write_rgba,
};
use crate::core::data::viewport_size::ViewportSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours `input` into an RGBA buffer of `size`.
///
/// `input` must be row-major with exactly one value per pixel. Colour mapping
/// runs on the rayon pool, one 4-byte chunk per value.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    size: ViewportSize,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync + ?Sized,
    CMap::Failure: Send,
{
    let expected_size = size.pixel_count() * BYTES_PER_PIXEL;
    let input_size = input.len() * BYTES_PER_PIXEL;

    if input_size != expected_size {
        return Err(GeneratePixelBufferError::PixelBuffer(
            PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: input_size,
            },
        ));
    }

    let mut buffer: PixelBufferData = vec![0; expected_size];

    buffer
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(input.par_iter())
        .try_for_each(|(dst, value)| -> Result<(), GeneratePixelBufferError<CMap::Failure>> {
            let colour = mapper.map(*value).map_err(GeneratePixelBufferError::ColourMap)?;
            write_rgba(dst, colour);
            Ok(())
        })?;

    Ok(PixelBuffer::from_data(size, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[derive(Debug, PartialEq)]
    struct StubColourMapError {}

    impl fmt::Display for StubColourMapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubColourMapError {}

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        type Failure = StubColourMapError;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        type Failure = StubColourMapError;

        fn map(&self, _: u8) -> Result<Colour, Self::Failure> {
            Err(StubColourMapError {})
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let size = ViewportSize::new(3, 2).unwrap();
        let expected_buffer: PixelBufferData = vec![
            1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6, 255,
        ];

        let results = generate_pixel_buffer(&input, &mapper, size).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.size(), size);
        assert_eq!(results.pixel(Point { x: 0, y: 1 }), Some(Colour { r: 4, g: 4, b: 4 }));
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};
        let size = ViewportSize::new(3, 2).unwrap();

        let results = generate_pixel_buffer(&input, &mapper, size);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::ColourMap(StubColourMapError {}))
        );
    }

    #[test]
    fn test_size_input_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let size = ViewportSize::new(2, 2).unwrap();

        let results = generate_pixel_buffer(&input, &mapper, size);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    expected_size: 16,
                    buffer_size: 24
                }
            ))
        );
    }

    #[test]
    fn test_error_display() {
        let err: GeneratePixelBufferError<StubColourMapError> =
            GeneratePixelBufferError::ColourMap(StubColourMapError {});

        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
