use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use fastgauss_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major with the `CHANNELS` samples of each pixel
/// interleaved, i.e. the buffer has shape (H, W, C). An RGBA bitmap is an
/// `Image<u8, 4>` and a single channel plane is an `Image<T, 1>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastgauss_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = size.area() * CHANNELS;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and pixel value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value every sample is initialized with.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.area() * CHANNELS];
        Image::new(size, data)
    }

    /// Create an image from a flat buffer and its width, inferring the height.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the image in pixels.
    /// * `data` - The interleaved pixel data, row-major.
    ///
    /// # Errors
    ///
    /// Fails if the width is zero, the buffer is empty, or the buffer length is
    /// not a multiple of `width * CHANNELS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastgauss_image::Image;
    ///
    /// let plane = Image::<u8, 1>::from_width_and_data(3, vec![0u8; 6]).unwrap();
    /// assert_eq!(plane.height(), 2);
    ///
    /// assert!(Image::<u8, 1>::from_width_and_data(4, vec![0u8; 6]).is_err());
    /// ```
    pub fn from_width_and_data(width: usize, data: Vec<T>) -> Result<Self, ImageError> {
        if width == 0 || data.is_empty() {
            return Err(ImageError::ZeroSizedImage(width, data.len()));
        }

        let row_len = width * CHANNELS;
        if data.len() % row_len != 0 {
            return Err(ImageError::DataNotDivisibleByWidth(
                data.len(),
                width,
                CHANNELS,
            ));
        }

        let height = data.len() / row_len;
        Image::new(ImageSize { width, height }, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to a sample by its `[row, col, channel]` index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, ch] = index;
        if y >= self.height() || x >= self.width() || ch >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width() + x) * CHANNELS + ch)
    }

    /// Get the value of a sample by pixel coordinate and channel.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the pixel.
    /// * `y` - The y-coordinate of the pixel.
    /// * `ch` - The channel index of the pixel.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError>
    where
        T: Copy,
    {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }

        Ok(self.data[(y * self.width() + x) * CHANNELS + ch])
    }

    /// Get a channel of the image.
    ///
    /// # Arguments
    ///
    /// * `channel` - The channel to get.
    ///
    /// # Returns
    ///
    /// A new single channel image with the samples of the given channel.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T, 1>, ImageError>
    where
        T: Copy,
    {
        if channel >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, CHANNELS));
        }

        let channel_data = self
            .data
            .iter()
            .skip(channel)
            .step_by(CHANNELS)
            .copied()
            .collect();

        Image::new(self.size, channel_data)
    }

    /// Split the image into its channel planes.
    ///
    /// Every pixel, in row-major order, contributes its `CHANNELS` samples to
    /// the planes at the same flat index.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastgauss_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 4>::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     vec![1, 2, 3, 4, 5, 6, 7, 8],
    /// ).unwrap();
    ///
    /// let planes = image.split_channels();
    /// assert_eq!(planes.len(), 4);
    /// assert_eq!(planes[0].as_slice(), &[1, 5]);
    /// assert_eq!(planes[3].as_slice(), &[4, 8]);
    /// ```
    pub fn split_channels(&self) -> Vec<Image<T, 1>>
    where
        T: Copy,
    {
        let num_pixels = self.size.area();
        let mut planes: Vec<Vec<T>> = (0..CHANNELS)
            .map(|_| Vec::with_capacity(num_pixels))
            .collect();

        for pixel in self.data.chunks_exact(CHANNELS) {
            for (plane, &sample) in planes.iter_mut().zip(pixel.iter()) {
                plane.push(sample);
            }
        }

        planes
            .into_iter()
            .map(|data| Image {
                size: self.size,
                data,
            })
            .collect()
    }

    /// Interleave channel planes back into a single image.
    ///
    /// This is the exact inverse of [`Image::split_channels`].
    ///
    /// # Errors
    ///
    /// Fails if the number of planes is not `CHANNELS`, if the planes do not all
    /// share the same size, or if the planes are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastgauss_image::{Image, ImageSize};
    ///
    /// let size = ImageSize { width: 2, height: 1 };
    /// let planes = vec![
    ///     Image::<u8, 1>::new(size, vec![1, 5]).unwrap(),
    ///     Image::<u8, 1>::new(size, vec![2, 6]).unwrap(),
    /// ];
    ///
    /// let image = Image::<u8, 2>::from_channels(&planes).unwrap();
    /// assert_eq!(image.as_slice(), &[1, 2, 5, 6]);
    /// ```
    pub fn from_channels(planes: &[Image<T, 1>]) -> Result<Self, ImageError>
    where
        T: Copy,
    {
        let size = match planes.first() {
            Some(plane) if planes.len() == CHANNELS => plane.size(),
            _ => return Err(ImageError::ChannelCountMismatch(planes.len(), CHANNELS)),
        };
        if size.is_empty() {
            return Err(ImageError::ZeroSizedImage(size.width, size.height));
        }

        if let Some((i, plane)) = planes
            .iter()
            .enumerate()
            .find(|(_, plane)| plane.size() != size)
        {
            return Err(ImageError::PlaneSizeMismatch(i, plane.size(), size));
        }

        let mut data = Vec::with_capacity(size.area() * CHANNELS);
        for idx in 0..size.area() {
            for plane in planes {
                data.push(plane.data[idx]);
            }
        }

        Image::new(size, data)
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
        assert!(!image_size.is_empty());
        assert_eq!(ImageSize::from([10, 20]), image_size);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 4);

        Ok(())
    }

    #[test]
    fn image_invalid_shape() {
        let res = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 15],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(15, 16)));
    }

    #[test]
    fn image_from_width_and_data() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_width_and_data(2, vec![0u8; 2 * 3 * 4])?;
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 3);

        assert_eq!(
            Image::<u8, 4>::from_width_and_data(3, vec![0u8; 2 * 3 * 4 + 4]),
            Err(ImageError::DataNotDivisibleByWidth(28, 3, 4))
        );
        assert_eq!(
            Image::<u8, 1>::from_width_and_data(0, vec![0u8; 4]),
            Err(ImageError::ZeroSizedImage(0, 4))
        );
        assert_eq!(
            Image::<u8, 1>::from_width_and_data(4, vec![]),
            Err(ImageError::ZeroSizedImage(4, 0))
        );

        Ok(())
    }

    #[test]
    fn image_get_pixel() -> Result<(), ImageError> {
        let image = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1, 2, 3, 4],
        )?;
        assert_eq!(image.get_pixel(1, 0, 1)?, 4);
        assert_eq!(image.get([0, 1, 0]), Some(&3));
        assert_eq!(image.get([1, 0, 0]), None);
        assert_eq!(
            image.get_pixel(2, 0, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 1))
        );
        assert_eq!(
            image.get_pixel(0, 0, 2),
            Err(ImageError::ChannelIndexOutOfBounds(2, 2))
        );

        Ok(())
    }

    #[test]
    fn image_channel() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0., 1., 2., 3., 4., 5.],
        )?;

        let channel = image.channel(2)?;
        assert_eq!(channel.get([1, 0, 0]), Some(&5.0f32));
        assert!(image.channel(3).is_err());

        Ok(())
    }

    #[test]
    fn image_split_channels() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![10, 20, 30, 40, 11, 21, 31, 41],
        )?;
        let channels = image.split_channels();
        assert_eq!(channels.len(), 4);
        assert_eq!(channels[0].as_slice(), &[10, 11]);
        assert_eq!(channels[1].as_slice(), &[20, 21]);
        assert_eq!(channels[2].as_slice(), &[30, 31]);
        assert_eq!(channels[3].as_slice(), &[40, 41]);
        assert!(channels.iter().all(|c| c.size() == image.size()));

        Ok(())
    }

    #[test]
    fn image_split_combine_roundtrip() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 7,
            height: 5,
        };
        let data = (0..size.area() * 4).map(|x| (x * 37 % 256) as u8).collect();
        let image = Image::<u8, 4>::new(size, data)?;

        let restored = Image::<u8, 4>::from_channels(&image.split_channels())?;
        assert_eq!(restored, image);

        let raw = restored.into_vec();
        assert_eq!(raw.len(), size.area() * 4);
        assert_eq!(Image::<u8, 4>::from_width_and_data(size.width, raw)?, image);

        Ok(())
    }

    #[test]
    fn image_from_channels_invalid() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let plane = Image::<u8, 1>::from_size_val(size, 0)?;
        let other = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 1,
            },
            0,
        )?;

        assert_eq!(
            Image::<u8, 4>::from_channels(&[plane.clone(), plane.clone()]),
            Err(ImageError::ChannelCountMismatch(2, 4))
        );
        assert_eq!(
            Image::<u8, 2>::from_channels(&[plane.clone(), other.clone()]),
            Err(ImageError::PlaneSizeMismatch(1, other.size(), size))
        );

        let empty = Image::<u8, 1>::new(
            ImageSize {
                width: 0,
                height: 3,
            },
            vec![],
        )?;
        assert_eq!(
            Image::<u8, 1>::from_channels(&[empty]),
            Err(ImageError::ZeroSizedImage(0, 3))
        );

        Ok(())
    }
}
