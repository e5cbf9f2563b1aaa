use std::collections::HashMap;
use std::path::{Path, PathBuf};

use font8x8::UnicodeFonts;
use image::io::Reader as ImageReader;
use image::RgbImage;
use showcase_domain::{Gallery, SceneModel, VerticalSection};

use super::SiteCopy;

const DOT_SIZE: usize = 12;
const DOT_GAP: usize = 14;
const DOT_HIT_PADDING: usize = 6;
const DOTS_BOTTOM: usize = 28;
const ARROW_WIDTH: usize = 48;
const ARROW_HEIGHT: usize = 28;
const ARROW_BOTTOM: usize = 48;
const SECTION_MARGIN: usize = 48;
const LINK_BOTTOM: usize = 96;
const LINK_HEIGHT: usize = 28;
const SCROLLBAR_WIDTH: usize = 6;
const GLYPH: usize = 8;
const SECTION_PALETTE: [u32; 4] = [0xF05C4B, 0xF7AE3D, 0x4E78D5, 0x1B1F26];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn contains(&self, (x, y): (f32, f32)) -> bool {
        x >= self.left as f32
            && y >= self.top as f32
            && x < (self.left + self.width) as f32
            && y < (self.top + self.height) as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Dot(usize),
    ScrollArrow,
    Link(usize),
}

pub fn dot_rect(index: usize, count: usize, width: usize, height: usize) -> Rect {
    let row = count * DOT_SIZE + count.saturating_sub(1) * DOT_GAP;
    Rect {
        left: width.saturating_sub(row) / 2 + index * (DOT_SIZE + DOT_GAP),
        top: height.saturating_sub(DOTS_BOTTOM + DOT_SIZE),
        width: DOT_SIZE,
        height: DOT_SIZE,
    }
}

pub fn scroll_arrow_rect(width: usize, height: usize) -> Rect {
    Rect {
        left: width.saturating_sub(ARROW_WIDTH) / 2,
        top: height.saturating_sub(ARROW_BOTTOM + ARROW_HEIGHT),
        width: ARROW_WIDTH,
        height: ARROW_HEIGHT,
    }
}

pub fn link_rect(link: &str, height: usize) -> Rect {
    Rect {
        left: SECTION_MARGIN,
        top: height.saturating_sub(LINK_BOTTOM),
        width: link.chars().count() * GLYPH * 2 + 16,
        height: LINK_HEIGHT,
    }
}

pub fn hit_test(
    position: (f32, f32),
    scene: &SceneModel,
    gallery: &Gallery,
    width: usize,
    height: usize,
) -> Option<HitTarget> {
    if scene.dots_visible {
        let count = scene.dots.len();
        for index in 0..count {
            let dot = dot_rect(index, count, width, height);
            let padded = Rect {
                left: dot.left.saturating_sub(DOT_HIT_PADDING),
                top: dot.top.saturating_sub(DOT_HIT_PADDING),
                width: dot.width + DOT_HIT_PADDING * 2,
                height: dot.height + DOT_HIT_PADDING * 2,
            };
            if padded.contains(position) {
                return Some(HitTarget::Dot(index));
            }
        }
    }

    match scene.scroll_target {
        VerticalSection::Intro => scroll_arrow_rect(width, height)
            .contains(position)
            .then_some(HitTarget::ScrollArrow),
        VerticalSection::Text => None,
        VerticalSection::Gallery => {
            let slot = scene.dots.active_index()?;
            let link = gallery.sections().get(slot)?.profile.link.as_deref()?;
            link_rect(link, height)
                .contains(position)
                .then_some(HitTarget::Link(slot))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

pub struct ImageCache {
    width: usize,
    height: usize,
    canvases: HashMap<PathBuf, Option<Canvas>>,
}

impl ImageCache {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            canvases: HashMap::new(),
        }
    }

    pub fn ensure(&mut self, path: &Path) {
        if self.canvases.contains_key(path) {
            return;
        }
        let canvas = load_cover_canvas(path, self.width, self.height);
        if canvas.is_none() {
            tracing::warn!(path = %path.display(), "failed to decode background");
        }
        self.canvases.insert(path.to_path_buf(), canvas);
    }

    pub fn ensure_scene(&mut self, scene: &SceneModel) {
        if let Some(intro) = &scene.intro_background {
            self.ensure(&intro.path);
            if let Some(previous) = &intro.previous {
                self.ensure(previous);
            }
        }
        for path in scene.section_backgrounds.iter().flatten() {
            self.ensure(path);
        }
    }

    pub fn peek(&self, path: &Path) -> Option<&Canvas> {
        self.canvases.get(path).and_then(Option::as_ref)
    }
}

fn load_cover_canvas(path: &Path, width: usize, height: usize) -> Option<Canvas> {
    let image = ImageReader::open(path)
        .ok()?
        .with_guessed_format()
        .ok()?
        .decode()
        .ok()?;
    cover_canvas(&image.to_rgb8(), width, height)
}

fn cover_canvas(source: &RgbImage, width: usize, height: usize) -> Option<Canvas> {
    let src_width = source.width() as usize;
    let src_height = source.height() as usize;
    if src_width == 0 || src_height == 0 || width == 0 || height == 0 {
        return None;
    }

    let scale = (width as f32 / src_width as f32).max(height as f32 / src_height as f32);
    let crop_x = (src_width as f32 * scale - width as f32) / 2.0;
    let crop_y = (src_height as f32 * scale - height as f32) / 2.0;

    let mut pixels = vec![0_u32; width * height];
    for y in 0..height {
        let src_y = (((y as f32 + crop_y) / scale) as usize).min(src_height - 1);
        for x in 0..width {
            let src_x = (((x as f32 + crop_x) / scale) as usize).min(src_width - 1);
            let [r, g, b] = source.get_pixel(src_x as u32, src_y as u32).0;
            pixels[y * width + x] = ((r as u32) << 16) | ((g as u32) << 8) | (b as u32);
        }
    }

    Some(Canvas {
        width,
        height,
        pixels,
    })
}

pub struct Frame<'a> {
    pub scene: &'a SceneModel,
    pub gallery: &'a Gallery,
    pub copy: &'a SiteCopy,
    pub scroll: f32,
    pub offsets: &'a [f32],
    pub fade: f32,
}

pub fn draw_scene(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    frame: &Frame<'_>,
    images: &ImageCache,
) {
    buffer.fill(0x111111);

    for section in VerticalSection::ALL {
        let top = ((section.index() as f32 - frame.scroll) * height as f32).round() as i32;
        if top <= -(height as i32) || top >= height as i32 {
            continue;
        }
        match section {
            VerticalSection::Intro => draw_intro(buffer, width, height, top, frame, images),
            VerticalSection::Text => draw_text_section(buffer, width, height, top, frame.copy),
            VerticalSection::Gallery => draw_gallery(buffer, width, height, top, frame, images),
        }
    }

    if frame.scene.dots_visible {
        draw_dots(buffer, width, height, frame.scene);
    }
    if !frame.scene.scrollbar_hidden {
        draw_scrollbar(buffer, width, height, frame.scroll);
    }
}

fn draw_intro(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    top: i32,
    frame: &Frame<'_>,
    images: &ImageCache,
) {
    fill_rect(buffer, width, 0, top, width, height, 0x1B1F26);
    if let Some(intro) = &frame.scene.intro_background {
        if let Some(previous) = intro.previous.as_deref().and_then(|path| images.peek(path)) {
            blit_canvas(buffer, width, previous, 0, top, 1.0);
        }
        if let Some(current) = images.peek(&intro.path) {
            blit_canvas(buffer, width, current, 0, top, frame.fade);
        }
    }

    let arrow = scroll_arrow_rect(width, height);
    let left = arrow.left as i32;
    let arrow_top = top + arrow.top as i32;
    let half = (arrow.width / 2) as i32;
    for step in 0..half {
        let y = arrow_top + step * arrow.height as i32 / half;
        for thickness in 0..3 {
            set_pixel(buffer, width, left + step, y + thickness, 0xFFFFFF);
            set_pixel(
                buffer,
                width,
                left + arrow.width as i32 - 1 - step,
                y + thickness,
                0xFFFFFF,
            );
        }
    }
}

fn draw_text_section(buffer: &mut [u32], width: usize, height: usize, top: i32, copy: &SiteCopy) {
    for y in 0..height {
        let t = y as f32 / height.max(1) as f32;
        let color = lerp_color(0xF7EFE0, 0xF2E1CC, t);
        fill_rect(buffer, width, 0, top + y as i32, width, 1, color);
    }

    let margin = SECTION_MARGIN as i32;
    let mut y = top + margin * 2;
    if !copy.title.is_empty() {
        draw_text(buffer, width, margin, y, &copy.title, 3, 0x1B1F26);
        y += (GLYPH * 3 + 24) as i32;
    }
    let columns = width.saturating_sub(SECTION_MARGIN * 2) / (GLYPH * 2);
    for line in wrap_text(&copy.intro_text, columns) {
        draw_text(buffer, width, margin, y, &line, 2, darken_color(0x4A4036, 10));
        y += (GLYPH * 2 + 10) as i32;
    }
}

fn draw_gallery(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    top: i32,
    frame: &Frame<'_>,
    images: &ImageCache,
) {
    for section in frame.gallery.sections() {
        let slot = section.slot();
        let Some(offset) = frame.offsets.get(slot) else {
            continue;
        };
        let left = (offset * width as f32).round() as i32;
        if left <= -(width as i32) || left >= width as i32 {
            continue;
        }

        let background = frame
            .scene
            .section_backgrounds
            .get(slot)
            .and_then(|path| path.as_deref())
            .and_then(|path| images.peek(path));
        match background {
            Some(canvas) => blit_canvas(buffer, width, canvas, left, top, 1.0),
            None => {
                let base = SECTION_PALETTE[slot % SECTION_PALETTE.len()];
                for y in 0..height {
                    let t = y as f32 / height.max(1) as f32;
                    let color = lerp_color(base, darken_color(base, 60), t);
                    fill_rect(buffer, width, left, top + y as i32, width, 1, color);
                }
            }
        }

        let margin = SECTION_MARGIN as i32;
        let title_top = top + height as i32 - (LINK_BOTTOM + GLYPH * 3 + 24) as i32;
        draw_text(buffer, width, left + margin + 2, title_top + 2, section.title(), 3, 0x000000);
        draw_text(buffer, width, left + margin, title_top, section.title(), 3, 0xFFFFFF);

        if let Some(link) = section.profile.link.as_deref() {
            let rect = link_rect(link, height);
            let rect_left = left + rect.left as i32;
            let rect_top = top + rect.top as i32;
            fill_rect(buffer, width, rect_left, rect_top, rect.width, rect.height, 0xFFFDF8);
            draw_rect(buffer, width, rect_left, rect_top, rect.width, rect.height, 0xCCBBA4);
            draw_text(buffer, width, rect_left + 8, rect_top + 6, link, 2, 0x4E78D5);
        }
    }
}

fn draw_dots(buffer: &mut [u32], width: usize, height: usize, scene: &SceneModel) {
    let count = scene.dots.len();
    for index in 0..count {
        let dot = dot_rect(index, count, width, height);
        let (left, top) = (dot.left as i32, dot.top as i32);
        if scene.dots.is_active(index) {
            fill_rect(buffer, width, left, top, dot.width, dot.height, 0xFFFFFF);
        } else {
            draw_rect(buffer, width, left, top, dot.width, dot.height, 0xFFFFFF);
        }
    }
}

fn draw_scrollbar(buffer: &mut [u32], width: usize, height: usize, scroll: f32) {
    let left = width.saturating_sub(SCROLLBAR_WIDTH) as i32;
    for y in 0..height {
        for x in 0..SCROLLBAR_WIDTH {
            let index = y * width + left as usize + x;
            if let Some(pixel) = buffer.get_mut(index) {
                *pixel = darken_color(*pixel, 40);
            }
        }
    }

    let thumb = height / 3;
    let travel = height.saturating_sub(thumb) as f32;
    let last = (VerticalSection::ALL.len() - 1) as f32;
    let thumb_top = (scroll / last).clamp(0.0, 1.0) * travel;
    fill_rect(
        buffer,
        width,
        left,
        thumb_top.round() as i32,
        SCROLLBAR_WIDTH,
        thumb,
        0xCCBBA4,
    );
}

pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > columns {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                lines.push(word.drain(..columns).collect());
            }
            let word: String = word.into_iter().collect();
            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > columns && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }
    lines
}

fn blit_canvas(buffer: &mut [u32], width: usize, canvas: &Canvas, left: i32, top: i32, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    for y in 0..canvas.height {
        for x in 0..canvas.width {
            let color = canvas.pixels[y * canvas.width + x];
            let (px, py) = (left + x as i32, top + y as i32);
            if alpha >= 1.0 {
                set_pixel(buffer, width, px, py, color);
            } else if let Some(index) = pixel_index(buffer, width, px, py) {
                buffer[index] = lerp_color(buffer[index], color, alpha);
            }
        }
    }
}

fn fill_rect(buffer: &mut [u32], width: usize, left: i32, top: i32, w: usize, h: usize, color: u32) {
    for y in top..top.saturating_add(h as i32) {
        for x in left..left.saturating_add(w as i32) {
            set_pixel(buffer, width, x, y, color);
        }
    }
}

fn draw_rect(buffer: &mut [u32], width: usize, left: i32, top: i32, w: usize, h: usize, color: u32) {
    if w == 0 || h == 0 {
        return;
    }
    let right = left + w as i32 - 1;
    let bottom = top + h as i32 - 1;
    for x in left..=right {
        set_pixel(buffer, width, x, top, color);
        set_pixel(buffer, width, x, bottom, color);
    }
    for y in top..=bottom {
        set_pixel(buffer, width, left, y, color);
        set_pixel(buffer, width, right, y, color);
    }
}

fn lerp_color(start: u32, end: u32, t: f32) -> u32 {
    let clamped = t.clamp(0.0, 1.0);
    let channel = |shift: u32| {
        let s = ((start >> shift) & 0xFF) as f32;
        let e = ((end >> shift) & 0xFF) as f32;
        ((s + (e - s) * clamped).round() as u32) << shift
    };
    channel(16) | channel(8) | channel(0)
}

fn darken_color(color: u32, amount: u8) -> u32 {
    let r = ((color >> 16) & 0xFF).saturating_sub(amount as u32);
    let g = ((color >> 8) & 0xFF).saturating_sub(amount as u32);
    let b = (color & 0xFF).saturating_sub(amount as u32);
    (r << 16) | (g << 8) | b
}

fn pixel_index(buffer: &[u32], width: usize, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 || width == 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    let height = buffer.len() / width;
    (x < width && y < height).then_some(y * width + x)
}

fn set_pixel(buffer: &mut [u32], width: usize, x: i32, y: i32, color: u32) {
    if let Some(index) = pixel_index(buffer, width, x, y) {
        buffer[index] = color;
    }
}

fn draw_text(buffer: &mut [u32], width: usize, x: i32, y: i32, text: &str, scale: usize, color: u32) {
    let mut cursor_x = x;
    for ch in text.chars() {
        if ch == '\n' {
            continue;
        }
        draw_char(buffer, width, cursor_x, y, ch, scale, color);
        cursor_x = cursor_x.saturating_add((GLYPH * scale) as i32);
    }
}

fn draw_char(buffer: &mut [u32], width: usize, x: i32, y: i32, ch: char, scale: usize, color: u32) {
    let glyph = font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8]);
    let scale = scale.max(1) as i32;
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8 {
            if (bits >> col) & 1 == 1 {
                let left = x + col * scale;
                let top = y + row as i32 * scale;
                fill_rect(buffer, width, left, top, scale as usize, scale as usize, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use showcase_domain::{ArtistId, ArtistProfile};

    use super::*;

    fn gallery_with_link() -> Gallery {
        Gallery::from_profiles(vec![
            ArtistProfile {
                id: ArtistId::new("anna").expect("id"),
                display_name: None,
                link: Some("@anna".to_string()),
            },
            ArtistProfile::bare(ArtistId::new("ben").expect("id")),
        ])
    }

    #[test]
    fn dots_are_centered_in_a_row() {
        let first = dot_rect(0, 3, 200, 100);
        let last = dot_rect(2, 3, 200, 100);
        // row = 3 * 12 + 2 * 14 = 64
        assert_eq!(first.left, 68);
        assert_eq!(last.left, 68 + 2 * 26);
        assert_eq!(first.top, 100 - 28 - 12);
    }

    #[test]
    fn dots_are_only_clickable_when_visible() {
        let gallery = gallery_with_link();
        let mut scene = SceneModel::new(2);
        let dot = dot_rect(1, 2, 400, 300);
        let center = (dot.left as f32 + 6.0, dot.top as f32 + 6.0);

        assert_eq!(hit_test(center, &scene, &gallery, 400, 300), None);
        scene.dots_visible = true;
        scene.scroll_target = VerticalSection::Gallery;
        assert_eq!(
            hit_test(center, &scene, &gallery, 400, 300),
            Some(HitTarget::Dot(1))
        );
    }

    #[test]
    fn scroll_arrow_is_hit_on_intro_only() {
        let gallery = gallery_with_link();
        let mut scene = SceneModel::new(2);
        let arrow = scroll_arrow_rect(400, 300);
        let inside = (arrow.left as f32 + 1.0, arrow.top as f32 + 1.0);

        assert_eq!(
            hit_test(inside, &scene, &gallery, 400, 300),
            Some(HitTarget::ScrollArrow)
        );
        scene.scroll_target = VerticalSection::Text;
        assert_eq!(hit_test(inside, &scene, &gallery, 400, 300), None);
    }

    #[test]
    fn link_is_hit_for_the_active_section_only() {
        let gallery = gallery_with_link();
        let mut scene = SceneModel::new(2);
        scene.scroll_target = VerticalSection::Gallery;
        let rect = link_rect("@anna", 300);
        let inside = (rect.left as f32 + 2.0, rect.top as f32 + 2.0);

        assert_eq!(
            hit_test(inside, &scene, &gallery, 400, 300),
            Some(HitTarget::Link(0))
        );
        scene.dots.sync(1);
        assert_eq!(hit_test(inside, &scene, &gallery, 400, 300), None);
    }

    #[test]
    fn cover_crops_the_wide_axis() {
        let mut source = RgbImage::new(2, 1);
        source.put_pixel(0, 0, Rgb([255, 0, 0]));
        source.put_pixel(1, 0, Rgb([0, 0, 255]));

        let canvas = cover_canvas(&source, 4, 4).expect("canvas");
        assert_eq!(canvas.pixels.len(), 16);
        assert_eq!(canvas.pixels[0], 0xFF0000);
        assert_eq!(canvas.pixels[3], 0x0000FF);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_text("painting and print\nsecond", 10);
        assert_eq!(lines, vec!["painting", "and print", "second"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn drawing_clips_at_the_buffer_edges() {
        let mut buffer = vec![0_u32; 4 * 4];
        fill_rect(&mut buffer, 4, -2, -2, 4, 4, 0xFFFFFF);
        assert_eq!(buffer[0], 0xFFFFFF);
        assert_eq!(buffer[1], 0xFFFFFF);
        assert_eq!(buffer[2], 0);
        assert_eq!(buffer[4 * 2], 0);
    }

    #[test]
    fn lerp_blends_each_channel() {
        assert_eq!(lerp_color(0x000000, 0xFFFFFF, 0.0), 0x000000);
        assert_eq!(lerp_color(0x000000, 0xFFFFFF, 1.0), 0xFFFFFF);
        assert_eq!(lerp_color(0x000000, 0x0000FF, 0.5), 0x000080);
    }
}
