//! The single page: upload, preview, streamed bridge results and follow-up links.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>HMI Analyzer – 8 Puentes</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: #fafafa;
            color: #222;
            padding: 40px 20px 80px;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
        }

        .header {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            gap: 20px;
        }

        h1 {
            font-size: 2.6em;
            margin-bottom: 8px;
        }

        .tagline {
            font-size: 32px;
            font-weight: 600;
            line-height: 1.3;
            margin-bottom: 24px;
        }

        .tagline strong {
            font-weight: 700;
        }

        .intro {
            font-size: 1.05em;
            line-height: 1.6;
            margin-bottom: 24px;
        }

        .banner {
            width: 100%;
            margin-bottom: 32px;
        }

        .upload-area {
            border: 2px dashed #1e88e5;
            border-radius: 8px;
            padding: 40px 20px;
            text-align: center;
            cursor: pointer;
            background: #f4f9fe;
            transition: background 0.2s;
        }

        .upload-area:hover,
        .upload-area.dragover {
            background: #e3f0fc;
        }

        .upload-text {
            color: #1e88e5;
            font-weight: 600;
            margin-bottom: 6px;
        }

        .upload-hint {
            color: #888;
            font-size: 0.9em;
        }

        input[type="file"] {
            display: none;
        }

        .preview {
            display: none;
            margin-top: 24px;
            text-align: center;
        }

        .preview img {
            max-width: 700px;
            width: 100%;
            border-radius: 6px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }

        .caption {
            color: #777;
            font-size: 0.9em;
            margin-top: 6px;
        }

        .actions {
            display: flex;
            justify-content: flex-end;
            margin-top: 16px;
        }

        button.analyze {
            background-color: #1e88e5;
            color: white;
            font-weight: 600;
            border-radius: 6px;
            padding: 0.6em 1.2em;
            border: none;
            cursor: pointer;
            font-size: 1em;
        }

        button.analyze:hover {
            background-color: #1565c0;
        }

        button.analyze:disabled {
            background-color: #90caf9;
            cursor: default;
        }

        .loading {
            display: none;
            align-items: center;
            gap: 12px;
            margin: 24px 0;
            color: #555;
        }

        .spinner {
            border: 3px solid #e0e0e0;
            border-top: 3px solid #1e88e5;
            border-radius: 50%;
            width: 24px;
            height: 24px;
            animation: spin 1s linear infinite;
        }

        @keyframes spin {
            0% { transform: rotate(0deg); }
            100% { transform: rotate(360deg); }
        }

        .bridge-head {
            display: flex;
            align-items: center;
            gap: 8px;
            margin-top: 16px;
        }

        .bridge-head img {
            width: 80px;
            height: 80px;
        }

        .bridge-number {
            font-size: 20px;
            color: #666;
        }

        .bridge-name {
            font-size: 32px;
            font-weight: 700;
        }

        .score-line {
            display: flex;
            align-items: baseline;
            gap: 14px;
            margin-top: 4px;
        }

        .score-value {
            font-size: 24px;
            font-weight: 700;
            color: #000;
        }

        .score-label {
            font-size: 16px;
            font-weight: 600;
        }

        .bar {
            background: #eee;
            border-radius: 4px;
            height: 10px;
            width: 100%;
            margin: 6px 0 8px 0;
        }

        .bar > div {
            height: 10px;
            border-radius: 4px;
        }

        hr.bridge-sep {
            border: none;
            border-top: 1px solid #ddd;
            margin: 24px 0 32px 0;
        }

        .global {
            display: none;
            border-top: 1px solid #ccc;
            margin-top: 24px;
            padding-top: 24px;
        }

        .global h2 {
            margin-bottom: 16px;
        }

        .metric-label {
            color: #666;
            font-size: 0.9em;
        }

        .metric-value {
            font-size: 2.2em;
            font-weight: 600;
            margin-bottom: 24px;
        }

        .synthesis {
            white-space: pre-wrap;
            line-height: 1.6;
        }

        .cta {
            display: none;
            border-top: 1px solid #ccc;
            margin-top: 32px;
            padding-top: 24px;
        }

        .cta-title {
            font-size: 22px;
            font-weight: 600;
            margin-bottom: 12px;
        }

        .cta-text {
            font-size: 16px;
            color: #444;
            max-width: 720px;
            margin-bottom: 28px;
            line-height: 1.5;
        }

        .cta-links {
            display: grid;
            grid-template-columns: 2fr 1fr 2fr;
        }

        a.cta-dark,
        a.cta-blue {
            display: block;
            text-align: center;
            color: white;
            padding: 0.6em 1.2em;
            border-radius: 6px;
            font-weight: 600;
            text-decoration: none;
        }

        a.cta-dark { background-color: #424242; }
        a.cta-dark:hover { background-color: #2f2f2f; }
        a.cta-blue { background-color: #1e88e5; grid-column: 3; }
        a.cta-blue:hover { background-color: #1565c0; }

        .error {
            display: none;
            background: #fee;
            border: 1px solid #fcc;
            color: #c33;
            padding: 15px;
            border-radius: 6px;
            margin-top: 20px;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <div>
                <h1>HMI Analyzer</h1>
                <div class="tagline">
                    Evaluación cognitiva basada en los 8 puentes de
                    <strong>The Cognitive Joint</strong>
                </div>
            </div>
            <img src="/assets/logo.svg" width="90" alt="The Cognitive Joint">
        </div>

        <p class="intro">
            Sube una imagen de una interfaz HMI y obtén una evaluación clara, crítica y orientativa
            sobre la calidad de su diseño desde un punto de vista cognitivo y operativo.
        </p>

        <img class="banner" src="/assets/banner_hmi.svg" alt="">

        <div class="upload-area" id="uploadArea">
            <div class="upload-text">Sube una imagen de tu HMI</div>
            <div class="upload-hint">PNG, JPG o JPEG • Máx. 10MB</div>
            <input type="file" id="fileInput" accept=".png,.jpg,.jpeg,image/png,image/jpeg">
        </div>

        <div class="preview" id="preview">
            <img id="previewImage" alt="HMI cargado">
            <div class="caption">HMI cargado</div>
            <div class="actions">
                <button class="analyze" id="analyzeButton">Analizar HMI</button>
            </div>
        </div>

        <div class="loading" id="loading">
            <div class="spinner"></div>
            <span>Analizando interfaz según los 8 Puentes Cognitivos...</span>
        </div>

        <div id="bridges"></div>

        <div class="global" id="global">
            <h2>Resultado global</h2>
            <div class="metric-label">Calidad UX HMI</div>
            <div class="metric-value" id="average"></div>
            <div class="synthesis" id="synthesis"></div>
        </div>

        <div class="error" id="error"></div>

        <div class="cta" id="cta">
            <div class="cta-title">¿Quieres ir más allá?</div>
            <div class="cta-text">
                Este análisis es una evaluación rápida basada en una única imagen.
                Si necesitas un diagnóstico más profundo —con contexto de uso real,
                flujos operativos y criterios industriales— podemos ayudarte.
                <br><br>
                También puedes conocer más sobre HMI Design Observatory, nuestros informes
                y otras herramientas de diseño HMI industrial.
            </div>
            <div class="cta-links" id="ctaLinks"></div>
        </div>
    </div>

    <script>
        const uploadArea = document.getElementById('uploadArea');
        const fileInput = document.getElementById('fileInput');
        const preview = document.getElementById('preview');
        const previewImage = document.getElementById('previewImage');
        const analyzeButton = document.getElementById('analyzeButton');
        const loading = document.getElementById('loading');
        const bridges = document.getElementById('bridges');
        const globalBox = document.getElementById('global');
        const average = document.getElementById('average');
        const synthesis = document.getElementById('synthesis');
        const errorDiv = document.getElementById('error');
        const cta = document.getElementById('cta');
        const ctaLinks = document.getElementById('ctaLinks');

        let selectedFile = null;

        uploadArea.addEventListener('click', () => fileInput.click());

        uploadArea.addEventListener('dragover', (e) => {
            e.preventDefault();
            uploadArea.classList.add('dragover');
        });

        uploadArea.addEventListener('dragleave', () => {
            uploadArea.classList.remove('dragover');
        });

        uploadArea.addEventListener('drop', (e) => {
            e.preventDefault();
            uploadArea.classList.remove('dragover');
            const file = e.dataTransfer.files[0];
            if (file && (file.type === 'image/png' || file.type === 'image/jpeg')) {
                selectFile(file);
            }
        });

        fileInput.addEventListener('change', (e) => {
            const file = e.target.files[0];
            if (file) {
                selectFile(file);
            }
        });

        analyzeButton.addEventListener('click', () => {
            if (selectedFile) {
                analyze(selectedFile);
            }
        });

        function selectFile(file) {
            selectedFile = file;
            const reader = new FileReader();
            reader.onload = (e) => {
                previewImage.src = e.target.result;
            };
            reader.readAsDataURL(file);
            preview.style.display = 'block';
            resetResults();
        }

        function resetResults() {
            bridges.replaceChildren();
            globalBox.style.display = 'none';
            average.textContent = '';
            synthesis.textContent = '';
            errorDiv.style.display = 'none';
            cta.style.display = 'none';
            ctaLinks.replaceChildren();
        }

        function el(tag, className, text) {
            const node = document.createElement(tag);
            if (className) node.className = className;
            if (text !== undefined) node.textContent = text;
            return node;
        }

        function renderBridge(b) {
            const block = el('div');

            const head = el('div', 'bridge-head');
            const icon = el('img');
            icon.src = b.icon;
            icon.alt = '';
            const names = el('div');
            names.append(el('div', 'bridge-number', b.number), el('div', 'bridge-name', b.name));
            head.append(icon, names);

            const scoreLine = el('div', 'score-line');
            const label = el('span', 'score-label', '— ' + b.label);
            label.style.color = b.color;
            scoreLine.append(el('span', 'score-value', b.score + '/10'), label);

            const bar = el('div', 'bar');
            const fill = el('div');
            fill.style.background = b.color;
            fill.style.width = (b.score * 10) + '%';
            bar.append(fill);

            block.append(head, scoreLine, bar, el('p', '', b.summary), el('hr', 'bridge-sep'));
            bridges.append(block);
        }

        function renderLinks(links) {
            for (const link of links) {
                const a = el('a', 'cta-' + link.style, link.label);
                a.href = link.href;
                a.target = '_blank';
                a.rel = 'noopener';
                ctaLinks.append(a);
            }
            cta.style.display = 'block';
        }

        function handleEvent(event) {
            switch (event.type) {
                case 'bridge':
                    renderBridge(event);
                    break;
                case 'average':
                    globalBox.style.display = 'block';
                    average.textContent = event.average.toFixed(1) + ' / 10';
                    break;
                case 'synthesis':
                    synthesis.textContent = event.text;
                    break;
                case 'completed':
                    renderLinks(event.links);
                    break;
                case 'failed':
                    throw new Error(event.message);
            }
        }

        async function analyze(file) {
            resetResults();
            analyzeButton.disabled = true;
            loading.style.display = 'flex';

            const formData = new FormData();
            formData.append('image', file);

            try {
                const response = await fetch('/analyze', {
                    method: 'POST',
                    body: formData
                });

                if (!response.ok) {
                    const body = await response.json().catch(() => ({}));
                    throw new Error(body.error || 'Upload failed');
                }

                const reader = response.body.getReader();
                const decoder = new TextDecoder();
                let buffered = '';

                while (true) {
                    const { value, done } = await reader.read();
                    if (done) break;
                    buffered += decoder.decode(value, { stream: true });
                    let newline;
                    while ((newline = buffered.indexOf('\n')) >= 0) {
                        const line = buffered.slice(0, newline).trim();
                        buffered = buffered.slice(newline + 1);
                        if (line) handleEvent(JSON.parse(line));
                    }
                }
            } catch (error) {
                errorDiv.textContent = 'Error: ' + error.message;
                errorDiv.style.display = 'block';
            } finally {
                loading.style.display = 'none';
                analyzeButton.disabled = false;
            }
        }
    </script>
</body>
</html>
"#;
